use crate::Automaton;
use std::collections::HashMap;
use std::io;
use std::io::Write;

impl Automaton {
    /// Writes this automaton as a graphviz `digraph`.
    ///
    /// States are numbered in sorted order, so the output is deterministic.
    /// Final states are drawn as double circles, the start state with a bold outline.
    pub fn output_dot(&self, w: &mut impl Write) -> io::Result<()> {
        let mut states: Vec<_> = self.states().iter().collect();
        states.sort();
        let ids: HashMap<_, _> = states.iter().enumerate().map(|(i, s)| (*s, i)).collect();

        writeln!(w, "digraph {{")?;

        for (id, state) in states.iter().enumerate() {
            let mut attrs = String::new();
            if self.is_final(state) {
                attrs.push_str(", shape=doublecircle");
            }
            if *state == self.start() {
                attrs.push_str(", style=bold");
            }
            let label = state.to_string().replace('\\', "\\\\").replace('"', "\\\"");
            writeln!(w, "node[label=\"{label}\"{attrs}] id{id}")?;
        }

        for (src, symbol, tgt) in self.transitions().sorted() {
            let (src, tgt) = (ids[src], ids[tgt]);
            let symbol = symbol.escape_default();
            writeln!(w, "id{src} -> id{tgt} [label=\"{symbol}\"]")?;
        }

        writeln!(w, "}}")?;

        Ok(())
    }
}
