// console.rs - Floating terminal widget

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, KeyboardEvent, MouseEvent};

use super::{Handles, Listener, Ticker, inject_sheet, set_style};
use crate::config::SiteConfig;
use crate::fx::styles;
use crate::fx::terminal::{self, Line, LineClass, Response, Session};
use crate::rng::XorShift32;

const MARKUP: &str = r#"
<div class="terminal-header">
    <div class="terminal-buttons">
        <span class="terminal-btn terminal-close"></span>
        <span class="terminal-btn terminal-minimize"></span>
        <span class="terminal-btn terminal-maximize"></span>
    </div>
    <div class="terminal-title"></div>
</div>
<div class="terminal-body">
    <div class="terminal-output" id="terminal-output"></div>
    <div class="terminal-input-line">
        <span class="terminal-prompt">$</span>
        <input type="text" class="terminal-input" id="terminal-input" placeholder="Type 'help' for commands..." />
    </div>
</div>"#;

struct Console {
    doc: Document,
    output: Element,
    session: Session,
    rng: XorShift32,
}

impl Console {
    fn render_line(&self, line: &Line) -> Result<(), JsValue> {
        let el = self.doc.create_element("div")?;
        el.set_class_name(line.class.css());
        match line.class {
            LineClass::Command => {
                let prompt = self.doc.create_element("span")?;
                prompt.set_class_name("terminal-prompt");
                prompt.set_text_content(Some("$"));
                el.append_child(&prompt)?;
                el.append_child(&self.doc.create_text_node(&format!(" {}", line.text)))?;
            }
            _ => {
                set_style(&el, "white-space", "pre-line");
                el.set_text_content(Some(&line.text));
            }
        }
        self.output.append_child(&el)?;
        self.output.set_scroll_top(self.output.scroll_height());
        Ok(())
    }

    fn append(&mut self, line: Line) {
        if let Err(e) = self.render_line(&line) {
            log::warn!("terminal: {e:?}");
        }
        self.session.push(line);
    }

    fn run(&mut self, input: &str) {
        let before = self.session.lines().len();
        let resp = self.session.execute(input, &mut self.rng);
        match resp {
            Response::Clear => self.output.set_inner_html(""),
            Response::Text { .. } => {
                let fresh: Vec<Line> = self.session.lines()[before..].to_vec();
                for line in &fresh {
                    if let Err(e) = self.render_line(line) {
                        log::warn!("terminal: {e:?}");
                    }
                }
            }
        }
    }
}

fn find(root: &Element, selector: &str) -> Result<Element, JsValue> {
    root.query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("terminal markup lacks {selector}")))
}

pub fn mount(doc: &Document, cfg: &SiteConfig, h: &mut Handles) -> Result<(), JsValue> {
    if !cfg.terminal.enabled {
        return Ok(());
    }
    let Some(body) = doc.body() else {
        log::debug!("terminal: no <body>, skipping");
        return Ok(());
    };

    let root = doc.create_element("div")?;
    root.set_class_name("embedded-terminal");
    root.set_inner_html(MARKUP);
    find(&root, ".terminal-title")?.set_text_content(Some(&cfg.terminal.title));
    body.append_child(&root)?;
    h.adopt(root.clone());
    inject_sheet(doc, &styles::TERMINAL)?;

    let output = find(&root, ".terminal-output")?;
    let input: HtmlInputElement = find(&root, ".terminal-input")?.dyn_into()?;

    let console = Rc::new(RefCell::new(Console {
        doc: doc.clone(),
        output,
        session: Session::new(),
        rng: XorShift32::from_js(),
    }));

    // Boot log
    {
        let console = console.clone();
        let step = cfg.terminal.boot_step_ms;
        let mut next = 0;
        h.tick(Ticker::start(0, move || {
            let (at, msg, class) = terminal::BOOT_LOG[next];
            console.borrow_mut().append(terminal::boot_line(msg, class));
            next += 1;
            let (following, _, _) = *terminal::BOOT_LOG.get(next)?;
            Some((following - at) * step)
        }));
    }

    {
        let console = console.clone();
        let field = input.clone();
        h.listen(Listener::new(&input, "keypress", move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                let cmd = field.value();
                console.borrow_mut().run(&cmd);
                field.set_value("");
            }
        })?);
    }

    let minimized = Rc::new(Cell::new(false));
    {
        let root = root.clone();
        let body = find(&root, ".terminal-body")?;
        let button = find(&root, ".terminal-minimize")?;
        h.listen(Listener::new(&button, "click", move |_: MouseEvent| {
            let now = !minimized.get();
            minimized.set(now);
            let _ = root.class_list().toggle_with_force("minimized", now);
            set_style(&body, "display", if now { "none" } else { "block" });
        })?);
    }
    {
        let target = root.clone();
        let button = find(&root, ".terminal-close")?;
        h.listen(Listener::new(&button, "click", move |_: MouseEvent| {
            set_style(&target, "display", "none");
        })?);
    }

    log::debug!("terminal: mounted");
    Ok(())
}
