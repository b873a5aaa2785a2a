use std::io::{self, BufRead, Write};

use crate::interpreter::evaluator::core::Evaluator;

/// Printed before every line is read.
pub const PROMPT: &str = ">> ";

/// Runs the read-eval-print loop until `reader` is exhausted.
///
/// Each line is parsed and evaluated on its own, but all lines share one
/// evaluator, so bindings persist across lines. Syntax errors are listed one
/// per line, tab-indented, and the line is not evaluated. Runtime errors are
/// printed as `ERROR: <message>`. Statements without a value print nothing.
///
/// # Errors
/// Fails only if reading from `reader` or writing to `writer` fails.
///
/// # Example
/// ```
/// let input = "let a = 5;\na * 2\n";
/// let mut output = Vec::new();
///
/// monkey::repl::start(input.as_bytes(), &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), ">> >> 10\n>> ");
/// ```
pub fn start<R, W>(reader: R, mut writer: W) -> io::Result<()>
    where R: BufRead,
          W: Write
{
    let evaluator = Evaluator::new();
    let mut lines = reader.lines();

    loop {
        write!(writer, "{PROMPT}")?;
        writer.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        let (program, errors) = crate::parse(&line);
        if !errors.is_empty() {
            for error in &errors {
                writeln!(writer, "\t{error}")?;
            }
            continue;
        }

        match evaluator.eval_program(&program) {
            Ok(Some(value)) => writeln!(writer, "{value}")?,
            Ok(None) => {},
            Err(error) => writeln!(writer, "ERROR: {error}")?,
        }
    }
}
