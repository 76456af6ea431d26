//! Plain-text reports printed by the CLI.

use cmdline_params_core::registry::ParameterRegistry;
use itertools::Itertools;

/// Lists every declared parameter with its help notes, one block per parameter.
pub fn describe_parameters(registry: &ParameterRegistry) -> String {
    registry
        .parameters()
        .map(|parameter| {
            let mut lines = vec![parameter.definition().to_string()];
            if parameter.definition().required {
                lines.push("    Required.".to_string());
            }
            lines.extend(
                parameter
                    .supplementary_notes()
                    .into_iter()
                    .map(|note| format!("    {note}")),
            );
            lines.join("\n")
        })
        .join("\n")
}

/// Lists every resolved value as `--name = value`.
pub fn describe_values(registry: &ParameterRegistry) -> String {
    registry.parameters().map(ToString::to_string).join("\n")
}
