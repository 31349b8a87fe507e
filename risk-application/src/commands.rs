pub mod registry_commands;
pub mod risk_model_commands;
pub mod score_commands;
