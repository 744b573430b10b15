use std::path::PathBuf;

use crate::api::ApiClient;
use crate::error::{Result, TallyError};
use crate::ingest::read_file;
use crate::models::FileKind;
use crate::preview::render_preview;
use crate::render::format_summary;
use crate::upload::{UploadController, UploadPhase};

pub fn run(api_url: &str, bank: &str, rules: &str, show_preview: bool) -> Result<()> {
    let mut controller = UploadController::new();
    controller.set_bank_file(read_file(&PathBuf::from(bank), FileKind::Csv)?);
    controller.set_rules_file(read_file(&PathBuf::from(rules), FileKind::Json)?);

    if show_preview {
        if let Some(file) = controller.bank_file() {
            println!("{}\n", render_preview(file));
        }
        if let Some(file) = controller.rules_file() {
            println!("{}\n", render_preview(file));
        }
    }

    let client = ApiClient::new(api_url);
    let outcome = {
        let (bank_file, rules_file) = controller.begin_submit()?;
        println!("Submitting {} and {}...", bank_file.name, rules_file.name);
        client.process_transactions(bank_file, rules_file)
    };
    controller.finish(outcome);

    match controller.phase() {
        UploadPhase::Succeeded(summary) => {
            print!("{}", format_summary(&summary));
            Ok(())
        }
        UploadPhase::Failed(message) => Err(TallyError::Api(message)),
        // begin_submit/finish only land on an outcome phase.
        _ => Ok(()),
    }
}
