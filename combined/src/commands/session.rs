//! Session commands: init, login, logout, whoami, profile, password.

use tracing::info;

use common::{ActionResult, AppError, AppResult, CancellationToken};
use domain::{ChangePassword, Investor, LoginRequest, UpdateProfile};
use portal_service_lib::PortalDataService;
use session_service_lib::SessionService;

use super::Portal;
use crate::cli::ProfileArgs;

pub async fn init(portal: &Portal) -> AppResult<()> {
    let investors = portal.store.get_investors().await?;
    info!(policy = %portal.store.policy(), "Seed collections written");

    println!(
        "Portal initialized: {} investors, {} companies, {} documents, {} notifications",
        investors.len(),
        portal.data.companies().len(),
        portal.data.documents().len(),
        portal.data.notifications().await.len(),
    );
    Ok(())
}

pub async fn login(
    portal: &Portal,
    email: String,
    password: String,
    cancel: &CancellationToken,
) -> AppResult<()> {
    let investor = portal
        .session
        .login(LoginRequest::new(email, password), cancel)
        .await?;

    portal.emit(&investor, |i| {
        println!("Signed in as {} <{}>", i.name(), i.email());
    })
}

pub async fn logout(portal: &Portal) -> AppResult<()> {
    portal.session.logout().await?;
    println!("Signed out");
    Ok(())
}

pub fn whoami(portal: &Portal) -> AppResult<()> {
    let investor = portal.signed_in()?;
    portal.emit(&investor, print_profile)
}

pub async fn profile(
    portal: &Portal,
    args: ProfileArgs,
    cancel: &CancellationToken,
) -> AppResult<()> {
    let update = UpdateProfile {
        name: args.name,
        email: args.email,
        phone: args.phone,
        company: args.company,
        avatar: args.avatar,
    };
    if update.is_empty() {
        return Err(AppError::validation(
            "Nothing to update; pass at least one field",
        ));
    }

    let result = ActionResult::from(portal.session.update_profile(update, cancel).await);
    report(portal, &result)
}

pub async fn password(
    portal: &Portal,
    current: String,
    new: String,
    cancel: &CancellationToken,
) -> AppResult<()> {
    let change = ChangePassword {
        current_password: current,
        new_password: new,
    };

    let result = ActionResult::from(portal.session.change_password(change, cancel).await);
    report(portal, &result)
}

fn report(portal: &Portal, result: &ActionResult) -> AppResult<()> {
    portal.emit(result, |r| match &r.error {
        None => println!("Saved"),
        Some(error) => println!("Failed: {}", error),
    })
}

fn print_profile(investor: &Investor) {
    let user = &investor.user;
    println!("{} <{}>", user.name, user.email);
    println!("  id:      {}", user.id);
    println!("  role:    {}", user.role);
    if let Some(phone) = &user.phone {
        println!("  phone:   {}", phone);
    }
    if let Some(company) = &user.company {
        println!("  company: {}", company);
    }
    println!("  joined:  {}", user.joined_at.format("%Y-%m-%d"));
    if let Some(last_login) = user.last_login {
        println!("  last login: {}", last_login.format("%Y-%m-%d %H:%M UTC"));
    }
}
