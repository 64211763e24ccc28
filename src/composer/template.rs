//! Snippet template and argument rendering

use tracing::debug;

use super::FormFields;

/// Indentation placed before every run-call argument
const ARGUMENT_INDENT: &str = "    ";

/// A named keyword argument of the run call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunArgument<'a> {
    pub name: &'static str,
    pub value: &'a str,
}

impl RunArgument<'_> {
    fn render(&self) -> String {
        format!(r#"{}{}="{}""#, ARGUMENT_INDENT, self.name, self.value)
    }
}

/// Collect the run-call arguments in their fixed order
///
/// `task` is always first; `model`, `vault_id` and `session_id` follow
/// when present.
pub fn run_arguments(fields: &FormFields) -> Vec<RunArgument<'_>> {
    let mut args = vec![RunArgument {
        name: "task",
        value: &fields.task,
    }];

    let optional = [
        ("model", fields.model()),
        ("vault_id", fields.vault_id()),
        ("session_id", fields.session_id()),
    ];
    for (name, value) in optional {
        if let Some(value) = value {
            args.push(RunArgument { name, value });
        }
    }

    args
}

/// Format the argument list that goes between the run call's parentheses
///
/// A single argument stays on the call line. Several arguments go one per
/// line, comma-separated, with the closing parenthesis on its own line.
fn format_run_arguments(args: &[RunArgument<'_>]) -> String {
    let rendered: Vec<String> = args.iter().map(RunArgument::render).collect();
    if rendered.len() > 1 {
        format!("\n{}\n", rendered.join(",\n"))
    } else {
        rendered.concat()
    }
}

/// Build the Python SDK example for the given form values
///
/// Values are inserted verbatim. Quote characters are not escaped, so a
/// value containing `"` yields example code that does not parse.
pub fn compose(fields: &FormFields) -> String {
    let args = run_arguments(fields);
    debug!(arguments = args.len(), "composing snippet");

    format!(
        r#"from notte_sdk import NotteClient

notte = NotteClient(api_key="{}")

response = notte.agents.run({})

print(response.answer)"#,
        fields.api_key,
        format_run_arguments(&args)
    )
}
