//! Command implementations

use chrono::Utc;
use tokio::time::Instant;
use tracing::debug;

use landbridge_app::{
    open_repositories, AuthService, Config, OrderQueryService, QuoteDriver, QuoteState,
    Repositories, Session, ShipmentWizard,
};
use landbridge_domain::model::{
    ContactAddress, LoginInput, PackageDraft, ProfileInput, QuoteRequest, RegisterInput,
};
use landbridge_domain::service::quote_breakdown;
use landbridge_domain::service::validation::validate_package;
use landbridge_types::{AuthRejection, Error, OutputFormat, Result, StorageError};

use crate::cli::{Cli, Commands, PackageArgs};
use crate::output;

pub async fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(ref dir) = cli.store_dir {
        config.store_dir = Some(dir.clone());
    }
    let format = cli.format.unwrap_or(config.output_format);
    debug!(?format, "resolved output format");

    match cli.command {
        Commands::Quote { package } => cmd_quote(&config, format, &package),
        Commands::Ship {
            package,
            package_type,
            fragile,
            sender_name,
            sender_phone,
            sender_postal_code,
            sender_prefecture,
            sender_city,
            sender_address1,
            sender_address2,
            recipient_name,
            recipient_phone,
            recipient_postal_code,
            recipient_prefecture,
            recipient_city,
            recipient_address1,
            recipient_address2,
            dry_run,
        } => {
            let sender = ContactAddress {
                name: sender_name,
                phone: sender_phone,
                postal_code: sender_postal_code,
                prefecture: sender_prefecture,
                city: sender_city,
                address1: sender_address1,
                address2: sender_address2,
            };
            let recipient = ContactAddress {
                name: recipient_name,
                phone: recipient_phone,
                postal_code: recipient_postal_code,
                prefecture: recipient_prefecture,
                city: recipient_city,
                address1: recipient_address1,
                address2: recipient_address2,
            };
            let mut draft = package_draft(&package);
            draft.package_type = package_type;
            draft.fragile = fragile;
            cmd_ship(&config, format, &package, draft, sender, recipient, dry_run).await
        }
        Commands::Orders { status, tracking } => {
            let (repos, session) = open_session(&config)?;
            let queries = OrderQueryService::new(&repos.orders);
            match tracking {
                Some(number) => {
                    let order = queries
                        .track(&session, &number)?
                        .ok_or(StorageError::NotFound(number))?;
                    output::output_tracked(format, &order)
                }
                None => output::output_orders(format, &queries.history(&session, status)?),
            }
        }
        Commands::Stats => {
            let (repos, session) = open_session(&config)?;
            let stats = OrderQueryService::new(&repos.orders).dashboard(&session)?;
            output::output_stats(format, &stats)
        }
        Commands::Register {
            email,
            password,
            confirm_password,
            name,
            phone,
            company,
        } => {
            let (repos, mut session) = open_session(&config)?;
            let input = RegisterInput {
                email,
                password,
                confirm_password,
                name,
                phone,
                company,
            };
            let user = AuthService::new(&repos.accounts, &repos.sessions).register(
                &mut session,
                &input,
                Utc::now(),
            )?;
            output::output_user(format, &user)
        }
        Commands::Login { email, password } => {
            let (repos, mut session) = open_session(&config)?;
            let user = AuthService::new(&repos.accounts, &repos.sessions).login(
                &mut session,
                &LoginInput { email, password },
                Utc::now(),
            )?;
            output::output_user(format, &user)
        }
        Commands::Logout => {
            let (repos, mut session) = open_session(&config)?;
            AuthService::new(&repos.accounts, &repos.sessions).logout(&mut session)?;
            println!("Signed out");
            Ok(())
        }
        Commands::Whoami => {
            let (_repos, session) = open_session(&config)?;
            output::output_user(format, session.require_user()?)
        }
        Commands::Profile {
            name,
            phone,
            company,
            address,
        } => {
            let (repos, mut session) = open_session(&config)?;
            let current = session.require_user()?;
            let input = ProfileInput {
                name: name.unwrap_or_else(|| current.name.clone()),
                phone: phone.unwrap_or_else(|| current.phone.clone()),
                company: company.or_else(|| current.company.clone()),
                address: address.or_else(|| current.address.clone()),
            };
            let user = AuthService::new(&repos.accounts, &repos.sessions)
                .update_profile(&mut session, &input)?;
            output::output_user(format, &user)
        }
        Commands::Demo => {
            let repos = landbridge_app::open_repositories_at(config.store_dir()?)?;
            repos.seed_demo_data()?;
            println!("Demo data ready: {}", landbridge_infra::DEMO_EMAIL);
            Ok(())
        }
        Commands::Config {
            show,
            set_debounce_ms,
            set_format,
            set_seed_demo,
        } => cmd_config(config, show, set_debounce_ms, set_format, set_seed_demo),
    }
}

fn open_session(config: &Config) -> Result<(Repositories, Session)> {
    let repos = open_repositories(config)?;
    let session = Session::restore(&repos.sessions)?;
    Ok((repos, session))
}

fn package_draft(args: &PackageArgs) -> PackageDraft {
    PackageDraft {
        weight_kg: Some(args.weight),
        length: Some(args.length),
        width: Some(args.width),
        height: Some(args.height),
        insurance: args.insurance,
        ..PackageDraft::default()
    }
}

fn cmd_quote(config: &Config, format: OutputFormat, args: &PackageArgs) -> Result<()> {
    let draft = package_draft(args);
    validate_package(&draft).into_result()?;

    let spec = draft.spec().ok_or(Error::QuoteUnavailable)?;
    let request = QuoteRequest {
        package: spec,
        delivery_speed: args.speed,
        sender_postal_code: String::new(),
        recipient_postal_code: String::new(),
    };
    output::output_quote(format, &quote_breakdown(&request, &config.fee_table))
}

async fn cmd_ship(
    config: &Config,
    format: OutputFormat,
    args: &PackageArgs,
    draft: PackageDraft,
    sender: ContactAddress,
    recipient: ContactAddress,
    dry_run: bool,
) -> Result<()> {
    let (repos, session) = open_session(config)?;
    let user = session.require_user()?;

    let mut driver = QuoteDriver::new(
        ShipmentWizard::new(config.debounce()),
        config.fee_table.clone(),
    );

    let wizard = driver.wizard_mut();
    let now = Instant::now();
    wizard.set_package_type(draft.package_type);
    wizard.set_fragile(draft.fragile);
    wizard.set_weight(draft.weight_kg, now);
    wizard.set_dimensions(draft.length, draft.width, draft.height, now);
    wizard.set_delivery_speed(args.speed, now);
    wizard.set_insurance(draft.insurance, now);
    wizard.next_step()?;

    let now = Instant::now();
    wizard.set_sender(sender, now);
    wizard.set_recipient(recipient, now);
    wizard.next_step()?;

    let quote = driver.settle().await;
    debug!(?quote, recomputes = driver.recompute_count(), "quote settled");
    output::output_review(driver.wizard().step(), driver.wizard().draft(), quote.last_value());

    if dry_run {
        return Ok(());
    }
    if !matches!(quote, QuoteState::Quoted(_)) {
        return Err(Error::QuoteUnavailable);
    }

    let order = driver
        .wizard_mut()
        .submit(user, &repos.orders, Utc::now())?;
    output::output_order(format, &order)
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_debounce_ms: Option<u64>,
    set_format: Option<OutputFormat>,
    set_seed_demo: Option<bool>,
) -> Result<()> {
    let mut modified = false;

    if let Some(ms) = set_debounce_ms {
        config.debounce_ms = ms;
        modified = true;
        println!("Debounce window set to {} ms", ms);
    }

    if let Some(format) = set_format {
        config.output_format = format;
        modified = true;
        println!("Output format set to: {}", format);
    }

    if let Some(seed) = set_seed_demo {
        config.seed_demo_data = seed;
        modified = true;
        println!("Demo data seeding: {}", if seed { "on" } else { "off" });
    }

    if modified {
        config.validate()?;
        config.save()?;
        println!("\nConfiguration saved to: {}", Config::config_path()?.display());
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

/// Map rejected sign-ins to a hint for the CLI user
pub fn hint_for(error: &Error) -> Option<&'static str> {
    match error {
        Error::Auth(AuthRejection::NotSignedIn) => {
            Some("Run `landbridge login --email <email> --password <password>` first")
        }
        Error::QuoteUnavailable => Some("Check the package weight, sizes and postal codes"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landbridge_types::DeliverySpeed;

    #[test]
    fn test_package_draft_from_args() {
        let args = PackageArgs {
            weight: 2.5,
            length: 30.0,
            width: 20.0,
            height: 10.0,
            speed: DeliverySpeed::Express,
            insurance: true,
        };
        let draft = package_draft(&args);
        assert_eq!(draft.weight_kg, Some(2.5));
        assert_eq!(draft.dimensions().map(|d| d.total_size()), Some(60.0));
        assert!(draft.insurance);
        assert!(!draft.fragile);
    }

    #[test]
    fn test_hint_for_not_signed_in() {
        assert!(hint_for(&AuthRejection::NotSignedIn.into()).is_some());
        assert!(hint_for(&Error::SubmissionInProgress).is_none());
    }
}
