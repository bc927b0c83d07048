// styles.rs - Injected stylesheets
//
// Each sheet is injected at most once, keyed by its element id.

pub struct Sheet {
    pub id: &'static str,
    pub css: &'static str,
}

pub const PCB: Sheet = Sheet {
    id: "pcb-animations",
    css: "
@keyframes traceDraw { to { stroke-dashoffset: 0; } }
@keyframes viaPulse {
    0%, 100% { opacity: 0.2; r: 3; }
    50% { opacity: 0.6; r: 4; }
}",
};

pub const HEXAGON: Sheet = Sheet {
    id: "hexagon-styles",
    css: "
.hexagon-border {
    position: absolute; width: 100%; height: 100%; top: 50%; left: 50%;
    transform: translate(-50%, -50%); z-index: 2; pointer-events: none;
}
.hex-layer {
    fill: none; stroke: #ef4444; stroke-width: 2; opacity: 0.6;
    filter: drop-shadow(0 0 8px rgba(239, 68, 68, 0.6));
}
.hex-layer-0 { animation: hexPulse 3s ease-in-out infinite; }
.hex-layer-1 { stroke-width: 1; opacity: 0.4; animation: hexPulse 3s ease-in-out infinite 0.5s; }
.hex-layer-2 { stroke-width: 3; opacity: 0.2; animation: hexPulse 3s ease-in-out infinite 1s; }
.led-dot {
    fill: #ef4444;
    filter: drop-shadow(0 0 4px #ef4444) drop-shadow(0 0 8px #ef4444);
    animation: ledBlink 1.5s ease-in-out infinite;
}
@keyframes hexPulse {
    0%, 100% { stroke-width: 2; opacity: 0.6; }
    50% { stroke-width: 3; opacity: 1; }
}
@keyframes ledBlink {
    0%, 100% { opacity: 0.4; r: 3; }
    50% { opacity: 1; r: 5; }
}",
};

pub const WAVEFORM: Sheet = Sheet {
    id: "waveform-styles",
    css: "
.waveform-divider {
    width: 100%; height: 60px; overflow: hidden; position: relative;
    background: linear-gradient(to bottom, transparent, rgba(239, 68, 68, 0.05), transparent);
}
.waveform-svg { width: 100%; height: 100%; }
.waveform-path {
    fill: none; stroke: #ef4444; stroke-width: 2; opacity: 0.8;
    filter: drop-shadow(0 0 4px rgba(239, 68, 68, 0.6));
}",
};

pub const LED: Sheet = Sheet {
    id: "led-indicator-styles",
    css: "
.led-indicator { position: absolute; top: 20px; right: 20px; z-index: 10; }
.led-status {
    width: 12px; height: 12px; border-radius: 50%; background: #ef4444; position: relative;
    box-shadow: 0 0 5px #ef4444, 0 0 10px #ef4444, 0 0 15px #ef4444, inset 0 0 5px rgba(255, 255, 255, 0.3);
}
.led-status::before {
    content: ''; position: absolute; top: 2px; left: 2px; width: 4px; height: 4px;
    border-radius: 50%; background: rgba(255, 255, 255, 0.8);
}
.led-slow-pulse { animation: ledSlowPulse 2s ease-in-out infinite; }
.led-fast-blink { animation: ledFastBlink 0.5s step-end infinite; }
.led-fade { animation: ledFade 3s ease-in-out infinite; }
@keyframes ledSlowPulse {
    0%, 100% { opacity: 0.3; box-shadow: 0 0 3px #ef4444, 0 0 6px #ef4444; }
    50% { opacity: 1; box-shadow: 0 0 8px #ef4444, 0 0 16px #ef4444, 0 0 24px #ef4444; }
}
@keyframes ledFastBlink { 0%, 49% { opacity: 1; } 50%, 100% { opacity: 0.2; } }
@keyframes ledFade { 0% { opacity: 0.2; } 50% { opacity: 1; } 100% { opacity: 0.2; } }
@media (max-width: 768px) {
    .led-indicator { top: 10px; right: 10px; }
    .led-status { width: 8px; height: 8px; }
    .led-status::before { top: 1px; left: 1px; width: 3px; height: 3px; }
}",
};

pub const TERMINAL: Sheet = Sheet {
    id: "terminal-styles",
    css: "
.embedded-terminal {
    position: fixed; bottom: 20px; right: 20px; width: 450px; max-width: 90vw;
    background: rgba(10, 10, 10, 0.95); border: 1px solid rgba(239, 68, 68, 0.3); border-radius: 8px;
    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.8), 0 0 20px rgba(239, 68, 68, 0.2);
    font-family: 'Courier New', monospace; z-index: 1000; backdrop-filter: blur(10px);
    animation: terminalSlideIn 0.5s ease-out;
}
@keyframes terminalSlideIn {
    from { transform: translateY(100%); opacity: 0; }
    to { transform: translateY(0); opacity: 1; }
}
.terminal-header {
    display: flex; align-items: center; padding: 8px 12px;
    background: rgba(239, 68, 68, 0.1); border-bottom: 1px solid rgba(239, 68, 68, 0.2);
    border-radius: 8px 8px 0 0;
}
.terminal-buttons { display: flex; gap: 6px; }
.terminal-btn {
    width: 12px; height: 12px; border-radius: 50%; cursor: pointer;
    transition: transform 0.2s ease, box-shadow 0.2s ease;
}
.terminal-btn:hover { transform: scale(1.2); }
.terminal-btn:active { transform: scale(0.95); }
.terminal-close { background: #ef4444; }
.terminal-close:hover { box-shadow: 0 0 8px rgba(239, 68, 68, 0.8); }
.terminal-minimize { background: #f59e0b; }
.terminal-minimize:hover { box-shadow: 0 0 8px rgba(245, 158, 11, 0.8); }
.terminal-maximize { background: #10b981; }
.terminal-maximize:hover { box-shadow: 0 0 8px rgba(16, 185, 129, 0.8); }
.terminal-title { flex: 1; text-align: center; color: #ef4444; font-size: 12px; font-weight: bold; }
.terminal-body { padding: 12px; max-height: 300px; overflow-y: auto; }
.terminal-output { color: #10b981; font-size: 12px; line-height: 1.6; margin-bottom: 8px; }
.terminal-line { margin: 4px 0; animation: terminalFadeIn 0.3s ease-out; }
@keyframes terminalFadeIn {
    from { opacity: 0; transform: translateX(-10px); }
    to { opacity: 1; transform: translateX(0); }
}
.terminal-error { color: #ef4444; }
.terminal-warning { color: #f59e0b; }
.terminal-input-line { display: flex; align-items: center; gap: 8px; }
.terminal-prompt { color: #ef4444; font-weight: bold; }
.terminal-input {
    flex: 1; background: transparent; border: none; color: #10b981;
    font-family: 'Courier New', monospace; font-size: 12px; outline: none;
}
.terminal-input::placeholder { color: rgba(16, 185, 129, 0.4); }
.embedded-terminal.minimized { width: 300px; transition: all 0.3s ease; }
.embedded-terminal.minimized .terminal-body { display: none; }",
};

pub const SKILL_NODES: Sheet = Sheet {
    id: "circuit-nodes-styles",
    css: "
.circuit-nodes-container { position: relative; min-height: 500px; }
.skills-canvas { position: absolute; top: 0; left: 0; pointer-events: none; z-index: 1; }
.skills-grid { position: relative; z-index: 2; }
.skill-node { cursor: pointer; transition: all 0.3s ease; position: relative; }
.skill-node::before {
    content: ''; position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%);
    width: 8px; height: 8px; background: rgba(239, 68, 68, 0.3); border-radius: 50%;
    opacity: 0; transition: opacity 0.3s ease;
}
.skill-node.active-node {
    background: linear-gradient(135deg, #ef4444, #dc2626);
    box-shadow: 0 0 20px rgba(239, 68, 68, 0.6), 0 0 40px rgba(239, 68, 68, 0.3), inset 0 0 10px rgba(255, 255, 255, 0.2);
    transform: scale(1.1); z-index: 10;
}
.skill-node.active-node::before { opacity: 1; animation: nodePulse 1s ease-in-out infinite; }
.skill-node.related-node {
    background: linear-gradient(135deg, rgba(239, 68, 68, 0.7), rgba(220, 38, 38, 0.7));
    box-shadow: 0 0 15px rgba(239, 68, 68, 0.4), 0 0 30px rgba(239, 68, 68, 0.2);
    transform: scale(1.05);
}
.skill-node.related-node::before { opacity: 1; }
@keyframes nodePulse {
    0%, 100% { transform: translate(-50%, -50%) scale(1); opacity: 0.8; }
    50% { transform: translate(-50%, -50%) scale(2); opacity: 0; }
}",
};

pub const SCAN_LINE: Sheet = Sheet {
    id: "scan-line-styles",
    css: "
.scan-line {
    position: fixed; top: 0; left: 0; width: 100%; height: 2px;
    background: linear-gradient(to right, transparent, rgba(239, 68, 68, 0.8), transparent);
    box-shadow: 0 0 10px rgba(239, 68, 68, 0.8);
    pointer-events: none; z-index: 9999; opacity: 0.3;
    animation: scanLineMove 4s linear infinite;
}
@keyframes scanLineMove { 0% { transform: translateY(0); } 100% { transform: translateY(100vh); } }
@media (max-width: 768px) { .scan-line { display: none; } }",
};

pub const ALL: [&Sheet; 7] = [&PCB, &HEXAGON, &WAVEFORM, &LED, &TERMINAL, &SKILL_NODES, &SCAN_LINE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = ALL.iter().map(|s| s.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), ALL.len());
    }

    #[test]
    fn braces_balance() {
        for s in ALL {
            assert_eq!(s.css.matches('{').count(), s.css.matches('}').count(), "{}", s.id);
        }
    }
}
