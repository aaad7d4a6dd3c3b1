use tracing::{info, warn};

use decision_matrix::application::DecisionMatrix;
use decision_matrix::config::AppConfig;
use decision_matrix::domain::matrix::IDENTICAL_OPTIONS_MESSAGE;
use decision_matrix::telemetry;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init(&config.logging)?;

    let validator = config.analysis.validator();
    let matrix = DecisionMatrix::sample();
    let evaluation = matrix.evaluate(&validator);

    for (index, option) in evaluation.ranked.iter().enumerate() {
        info!(
            rank = index + 1,
            option_id = %option.id(),
            name = option.name(),
            score = option.score,
            "Ranked option"
        );
    }
    info!("{}", evaluation.summary());

    for finding in evaluation.report.findings() {
        warn!(kind = %finding.kind, severity = ?finding.severity, "{}", finding.message);
    }
    if let Some(pair) = &evaluation.identical_options {
        warn!(first = %pair.first, second = %pair.second, "{}", IDENTICAL_OPTIONS_MESSAGE);
    }

    Ok(())
}
