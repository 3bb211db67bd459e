//! Line parser for qasmf.
//!
//! Grammar, one instruction per line:
//!
//! ```text
//! cbit <name>
//! <Op> <qubit>
//! <Rx|Ry|Rz> <qubit>,<angle>
//! CNOT <control>,<target>
//! ```
//!
//! Blank lines are skipped.

use qroute_ir::{CNOT, Circuit, Instruction, QubitName, Rotation, UnaryGate};

use crate::error::{ParseError, ParseResult};
use crate::lexer::{Token, tokenize};

/// Keyword introducing a classical bit declaration.
pub const CBIT: &str = "cbit";

/// Operands following the operator on one line.
enum Operands<'a> {
    One(&'a str),
    Pair(&'a str, &'a str),
}

/// Parse qasmf source into a circuit over logical qubit names.
pub fn parse(source: &str) -> ParseResult<Circuit> {
    let mut circuit = Circuit::new();

    for (index, line) in source.lines().enumerate() {
        if let Some(instruction) = parse_line(line, index + 1)? {
            circuit.push(instruction);
        }
    }

    Ok(circuit)
}

/// Parse a single line.
///
/// Returns `None` for a blank line. `line_number` is only used for error
/// reporting.
pub fn parse_line(line: &str, line_number: usize) -> ParseResult<Option<Instruction>> {
    let mut tokens = Vec::new();
    for result in tokenize(line) {
        match result {
            Ok(t) => tokens.push(t.token),
            Err((span, message)) => {
                return Err(ParseError::LexerError {
                    line: line_number,
                    column: span.start + 1,
                    message,
                });
            }
        }
    }

    let malformed = |message: String| ParseError::MalformedInstruction {
        line: line_number,
        text: line.trim().to_string(),
        message,
    };

    let (operator, rest) = match tokens.as_slice() {
        [] => return Ok(None),
        [Token::Word(operator), rest @ ..] => (operator.as_str(), rest),
        [Token::Comma, ..] => return Err(malformed("expected an operator".to_string())),
    };

    let operands = match rest {
        [Token::Word(a)] => Operands::One(a.as_str()),
        [Token::Word(a), Token::Comma, Token::Word(b)] => Operands::Pair(a.as_str(), b.as_str()),
        [] => return Err(malformed(format!("'{operator}' is missing its operand"))),
        _ => {
            return Err(malformed(
                "expected '<operand>' or '<operand>,<operand>'".to_string(),
            ));
        }
    };

    build_instruction(operator, operands).map(Some).map_err(malformed)
}

fn build_instruction(operator: &str, operands: Operands<'_>) -> Result<Instruction, String> {
    let rotation = Rotation::from_name(operator);

    match (operator, operands) {
        (CBIT, Operands::One(name)) => Ok(Instruction::cbit(name)),
        (CBIT, Operands::Pair(..)) => Err("cbit declares exactly one classical bit".to_string()),

        (CNOT, Operands::Pair(control, target)) if control == target => Err(format!(
            "CNOT control and target must be distinct, both are '{control}'"
        )),
        (CNOT, Operands::Pair(control, target)) => Ok(Instruction::cnot(
            QubitName::from(control),
            QubitName::from(target),
        )),
        (CNOT, Operands::One(_)) => Err("CNOT requires '<control>,<target>'".to_string()),

        (_, Operands::Pair(qubit, angle)) => match rotation {
            Some(axis) => Ok(Instruction::unary(
                UnaryGate::rotation(axis, angle),
                QubitName::from(qubit),
            )),
            None => Err(format!(
                "only CNOT takes two qubit operands, found '{operator}'"
            )),
        },
        (_, Operands::One(qubit)) => match rotation {
            Some(axis) => Err(format!("{axis} requires '<qubit>,<angle>'")),
            None => Ok(Instruction::unary(
                UnaryGate::fixed(operator),
                QubitName::from(qubit),
            )),
        },
    }
}
