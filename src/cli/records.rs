use crate::api::ApiClient;
use crate::error::{Result, TallyError};
use crate::query::{QueryController, QueryPhase};
use crate::render::format_transactions;

pub fn run(api_url: &str, company_id: &str) -> Result<()> {
    let mut controller = QueryController::new();
    let token = controller.start(company_id)?;

    println!("Fetching transactions for {}...", company_id.trim());
    let client = ApiClient::new(api_url);
    controller.finish(token, client.transactions_by_company(company_id));

    match controller.phase() {
        QueryPhase::Loaded(records) => {
            println!("{}", format_transactions(records));
            Ok(())
        }
        QueryPhase::Error(message) => Err(TallyError::Api(message.clone())),
        // finish always lands on Loaded or Error.
        _ => Ok(()),
    }
}
