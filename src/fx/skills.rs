// skills.rs - Skill relation graph and hover link geometry
//
// Relations are declared per node as a comma-separated id list. The graph
// is built once; node centers are a separate layout refreshed on resize.

use std::collections::{BTreeSet, HashMap};

use crate::render::Point;

/// Control point lift above the chord midpoint
const ARC_LIFT: f32 = 50.0;

#[derive(Clone, Debug, Default)]
pub struct SkillGraph {
    related: HashMap<String, BTreeSet<String>>,
    order: Vec<String>,
}

impl SkillGraph {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut graph = Self::default();
        for (id, csv) in pairs {
            graph.insert(id, csv);
        }
        graph
    }

    pub fn insert(&mut self, id: &str, related_csv: &str) {
        let set: BTreeSet<String> = related_csv
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        if !self.related.contains_key(id) {
            self.order.push(id.to_string());
        }
        self.related.insert(id.to_string(), set);
    }

    pub fn related(&self, id: &str) -> impl Iterator<Item = &str> {
        self.related.get(id).into_iter().flatten().map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.related.contains_key(id)
    }

    /// Node ids in declaration order
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize { self.order.len() }
    pub fn is_empty(&self) -> bool { self.order.is_empty() }
}

/// Attribute selector matching every element tagged with `id`
pub fn node_selector(id: &str) -> String {
    let escaped = id.replace('\\', "\\\\").replace('"', "\\\"");
    format!("[data-node=\"{escaped}\"]")
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: Point,
    pub ctrl: Point,
    pub to: Point,
}

impl Link {
    pub fn arc(from: Point, to: Point) -> Self {
        let mid = from.lerp(to, 0.5);
        Self { from, ctrl: Point::new(mid.x, mid.y - ARC_LIFT), to }
    }
}

/// Screen-space centers of the nodes, relative to the overlay canvas
#[derive(Clone, Debug, Default)]
pub struct SkillLayout {
    centers: HashMap<String, Point>,
}

impl SkillLayout {
    pub fn set(&mut self, id: &str, center: Point) {
        self.centers.insert(id.to_string(), center);
    }

    pub fn clear(&mut self) {
        self.centers.clear();
    }

    pub fn center(&self, id: &str) -> Option<Point> {
        self.centers.get(id).copied()
    }

    /// Links from the active node to each related node that has a position
    pub fn links(&self, graph: &SkillGraph, active: &str) -> Vec<Link> {
        let Some(from) = self.center(active) else { return Vec::new() };
        graph
            .related(active)
            .filter_map(|id| self.center(id))
            .map(|to| Link::arc(from, to))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> SkillGraph {
        SkillGraph::from_pairs([("c", "rtos, mcu,,"), ("rtos", "c"), ("mcu", "c,pcb")])
    }

    #[test]
    fn relations_are_trimmed_sets() {
        let g = graph();
        let rel: Vec<_> = g.related("c").collect();
        assert_eq!(rel, ["mcu", "rtos"]);
        assert_eq!(g.related("nope").count(), 0);
        assert_eq!(g.ids(), ["c", "rtos", "mcu"]);
    }

    #[test]
    fn selectors_quote_ids() {
        assert_eq!(node_selector("rtos"), r#"[data-node="rtos"]"#);
        assert_eq!(node_selector(r#"a"b"#), r#"[data-node="a\"b"]"#);
    }

    #[test]
    fn links_skip_unplaced_nodes() {
        let g = graph();
        let mut layout = SkillLayout::default();
        layout.set("mcu", Point::new(0.0, 100.0));
        layout.set("c", Point::new(100.0, 100.0));
        let links = layout.links(&g, "mcu");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].ctrl, Point::new(50.0, 50.0));
        assert!(layout.links(&g, "pcb").is_empty());
    }
}
