use clap::Parser;
use contact_portal::app::terminal::TerminalForm;
use contact_portal::utils::logger;
use contact_portal::{CliConfig, ContactFormController, DismissDelays, HttpMailTransport};
use std::io::IsTerminal;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting contact-portal");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_message());
            std::process::exit(e.exit_code());
        }
    };

    let transport = match HttpMailTransport::from_config(&settings) {
        Ok(transport) => transport,
        Err(e) => {
            eprintln!("❌ {}", e.user_message());
            std::process::exit(e.exit_code());
        }
    };
    tracing::debug!("Mail endpoint: {}", transport.endpoint());

    let controller = ContactFormController::with_delays(
        Arc::new(transport),
        DismissDelays::from_config(&settings),
    );
    for (field, value) in config.prefilled() {
        controller.update_field(field, value);
    }

    // 非終端輸入時不提示，缺少的欄位交給 submit 報告
    let interactive = !config.no_input && std::io::stdin().is_terminal();
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let mut form = TerminalForm::new(controller, stdin, stdout, interactive);

    let outcome = match form.collect() {
        Ok(()) => form.submit(config.wait_dismiss).await,
        Err(e) => Err(e),
    };

    if let Err(e) = outcome {
        tracing::error!("❌ Message not sent: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_message());
        std::process::exit(e.exit_code());
    }
}
