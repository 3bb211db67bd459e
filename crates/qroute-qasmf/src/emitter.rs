//! Emitter for qasmf.

use std::fmt::Display;
use std::io::{self, Write};

use qroute_ir::Circuit;

/// Render a circuit as qasmf text, one `\n`-terminated line per instruction.
///
/// Works for any operand type with a textual form, so both logical circuits
/// and routed circuits over grid coordinates can be emitted.
pub fn emit<Q: Display>(circuit: &Circuit<Q>) -> String {
    circuit.to_string()
}

/// Write a circuit as qasmf text to `writer`.
pub fn emit_to<Q: Display, W: Write>(circuit: &Circuit<Q>, mut writer: W) -> io::Result<()> {
    for instruction in circuit {
        writeln!(writer, "{instruction}")?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_emit_matches_source_layout() {
        let source = "cbit c\nH a\nRz b,0.5\nCNOT a,b\n";
        let circuit = parse(source).unwrap();
        assert_eq!(emit(&circuit), source);
    }

    #[test]
    fn test_emit_cbit_keeps_name_normalizes_spacing() {
        let circuit = parse("cbit   c[3]  ").unwrap();
        assert_eq!(emit(&circuit), "cbit c[3]\n");
    }

    #[test]
    fn test_emit_normalizes_whitespace() {
        let circuit = parse("  CNOT   a , b").unwrap();
        assert_eq!(emit(&circuit), "CNOT a,b\n");
    }

    #[test]
    fn test_emit_to_writer() {
        let circuit = parse("X q\nCNOT q,r\n").unwrap();
        let mut buffer = Vec::new();
        emit_to(&circuit, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), emit(&circuit));
    }

    #[test]
    fn test_emit_empty_circuit() {
        let circuit = parse("").unwrap();
        assert_eq!(emit(&circuit), "");
    }
}
