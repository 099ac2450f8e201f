use fnol_core::error::FnolError;
use fnol_core::result::ProcessingResult;
use fnol_core::routing::RuleEvaluation;

pub fn print(result: &ProcessingResult, trace: Option<&[RuleEvaluation]>) -> Result<(), FnolError> {
    let json = match trace {
        Some(trace) => serde_json::to_string_pretty(&serde_json::json!({
            "result": result,
            "ruleTrace": trace,
        }))?,
        None => serde_json::to_string_pretty(result)?,
    };
    println!("{json}");
    Ok(())
}
