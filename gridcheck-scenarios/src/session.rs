//! Sign-in and sign-out against the dashboard's login form.
use crate::wait_err;
use gridcheck_common::Result;
use gridcheck_config::Credentials;
use gridcheck_drivers::browser::page::Page;
use tracing::info;

/// Open the dashboard and sign in with the configured credentials.
///
/// The form is located by accessible names ("Email address", "Password") and
/// the fields are typed with paced keystrokes; the dashboard validates per
/// keystroke.
pub async fn login(page: &Page, base_url: &str, credentials: &Credentials) -> Result<()> {
    page.goto(base_url).await?;

    let email = page
        .find_labelled_input("Email address")
        .await
        .map_err(wait_err)?;
    email.type_str(&credentials.email).await?;

    let password = page
        .find_labelled_input("Password")
        .await
        .map_err(wait_err)?;
    password.type_str(&credentials.password).await?;

    page.click_text("Sign in").await?;
    info!(target: "scenario.session", email = %credentials.email, "signed in");
    Ok(())
}

/// Sign out via the Logout control.
pub async fn logout(page: &Page) -> Result<()> {
    page.click_text("Logout").await?;
    info!(target: "scenario.session", "signed out");
    Ok(())
}
