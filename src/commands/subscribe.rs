use anyhow::{Result, anyhow};
use log::debug;

use crate::form::{FormClient, FormStatus, SignupForm};

use super::config::Config;
use super::services::build_form_client;

/// Submit the launch signup form once.
#[tracing::instrument(skip(config, message))]
pub async fn subscribe(config: &Config, email: &str, message: &str) -> Result<()> {
    let client = build_form_client(config)?;
    run(&client, email, message).await
}

pub(crate) async fn run<C: FormClient + ?Sized>(client: &C, email: &str, message: &str) -> Result<()> {
    let mut form = SignupForm::new();
    form.set_email(email);
    form.set_message(message);

    match form.submit(client).await {
        FormStatus::Submitted => {
            println!("Thanks! You're on the list.");
            Ok(())
        }
        // Nothing was sent for a bad address; anything else reached the network.
        FormStatus::Error(e) if e.is_validation() => Err(anyhow!(e.clone())),
        FormStatus::Error(e) => Err(anyhow!(e.clone()).context("Signup was not recorded")),
        other => {
            debug!("Unexpected form status {:?}", other);
            Err(anyhow!("Submission did not complete"))
        }
    }
}
