//! Interactive scenario entry
//!
//! Reads scenario parameters line by line. Every answer is validated as it is
//! read, so a bad value stops the run before any scenario is simulated.

use std::io::{BufRead, Write};
use tracing::debug;

use crate::simulation::{SimulationError, SimulationResult};
use crate::types::ScenarioConfig;

/// Ask for `count` scenarios on `output`, reading answers from `input`
pub fn prompt_scenarios<R, W>(input: &mut R, output: &mut W, count: usize) -> SimulationResult<Vec<ScenarioConfig>>
where
    R: BufRead,
    W: Write,
{
    let mut scenarios = Vec::with_capacity(count);

    for number in 1..=count {
        let customers = ask_positive(input, output, &format!("Scenario {} - Number of customers: ", number))?;
        let rooms = ask_positive(input, output, &format!("Scenario {} - Number of dressing rooms: ", number))?;
        let items = ask_number(
            input,
            output,
            &format!("Scenario {} - Number of items per customer (0 for random): ", number),
        )?;

        let scenario = ScenarioConfig::new(customers, rooms, items);
        debug!(?scenario, "Collected scenario {}", number);
        scenarios.push(scenario);
    }

    Ok(scenarios)
}

fn ask_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> SimulationResult<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(SimulationError::input_error(format!(
            "input ended before an answer to \"{}\"",
            question.trim_end()
        )));
    }
    Ok(line.trim().to_string())
}

fn ask_number<R: BufRead, W: Write, T: std::str::FromStr>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> SimulationResult<T> {
    let answer = ask_line(input, output, question)?;
    answer.parse().map_err(|_| {
        SimulationError::invalid_configuration(format!(
            "{} expected a non-negative whole number, got \"{}\"",
            question.trim_end().trim_end_matches(':'),
            answer
        ))
    })
}

fn ask_positive<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> SimulationResult<usize> {
    let value: usize = ask_number(input, output, question)?;
    if value == 0 {
        return Err(SimulationError::invalid_configuration(format!(
            "{} must be greater than 0",
            question.trim_end().trim_end_matches(':')
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_collects_scenarios() {
        let mut input = Cursor::new("10\n3\n0\n 4 \n1\n25\n");
        let mut output = Vec::new();
        let scenarios = prompt_scenarios(&mut input, &mut output, 2).unwrap();

        assert_eq!(scenarios, vec![ScenarioConfig::new(10, 3, 0), ScenarioConfig::new(4, 1, 25)]);
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Scenario 1 - Number of customers: "));
        assert!(transcript.contains("Scenario 2 - Number of items per customer (0 for random): "));
    }

    #[test]
    fn test_non_numeric_answer_is_invalid_configuration() {
        let mut input = Cursor::new("ten\n");
        let err = prompt_scenarios(&mut input, &mut Vec::<u8>::new(), 1).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidConfiguration(_)));
        assert!(err.to_string().contains("\"ten\""));
    }

    #[test]
    fn test_zero_rooms_rejected() {
        let mut input = Cursor::new("5\n0\n1\n");
        let err = prompt_scenarios(&mut input, &mut Vec::<u8>::new(), 1).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidConfiguration(_)));
        assert!(err.to_string().contains("dressing rooms must be greater than 0"));
    }

    #[test]
    fn test_negative_items_rejected() {
        let mut input = Cursor::new("5\n2\n-1\n");
        let err = prompt_scenarios(&mut input, &mut Vec::<u8>::new(), 1).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_truncated_input() {
        let mut input = Cursor::new("5\n");
        let err = prompt_scenarios(&mut input, &mut Vec::<u8>::new(), 1).unwrap_err();
        assert!(matches!(err, SimulationError::InputError(_)));
    }
}
