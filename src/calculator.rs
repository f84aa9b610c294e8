use crate::{
    error::PResult,
    history::{History, Status},
    runtime::Interpreter,
};

/// Evaluates user input and keeps a record of it.
pub(crate) struct Calculator {
    interpreter: Interpreter,
    history: Option<History>,
}

impl Calculator {
    pub fn new(interpreter: Interpreter, history: Option<History>) -> Self {
        Self {
            interpreter,
            history,
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Returns `None` for blank input, which is neither evaluated nor recorded.
    /// Error offsets refer to `input` as given, surrounding whitespace included.
    pub fn calculate(&self, input: &str) -> Option<PResult<f64>> {
        let expression = input.trim();
        if expression.is_empty() {
            return None;
        }

        log::info!("Input: {expression}");
        let result = self.interpreter.eval(input);

        let (text, status) = match &result {
            Ok(value) => {
                let text = format_number(*value);
                log::info!("Success: {text}");
                (text, Status::Success)
            }
            Err(why) => {
                log::error!("Error: {why}");
                (why.to_string(), Status::Error)
            }
        };

        if let Some(history) = &self.history {
            if let Err(why) = history.save(expression, &text, status) {
                log::warn!("{why}");
            }
        }

        Some(result)
    }
}

/// Integral values print without a fraction, everything else with at most
/// ten decimals.
pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{value:.10}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        _ => trimmed.to_string(),
    }
}
