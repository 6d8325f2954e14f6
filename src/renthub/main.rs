use chrono::{NaiveDate, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use renthub::api::{CmdMessage, ConfigAction, DraftParams, MessageLevel, RentHubApi, RentHubPaths};
use renthub::config::RentHubConfig;
use renthub::editor::edit_terms;
use renthub::error::{RentHubError, Result};
use renthub::lease::{allowed_actions, LeaseAction};
use renthub::model::{LeaseAgreement, Property};
use renthub::search::{parse_property_type, parse_rent_bound, SearchFilters};
use renthub::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, LeaseCommands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: RentHubApi<FileStore>,
    config: RentHubConfig,
    verbose: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { featured }) => handle_list(&mut ctx, featured),
        Some(Commands::Search {
            query,
            location,
            min_rent,
            max_rent,
            property_types,
            bedrooms,
            bathrooms,
            amenities,
        }) => {
            let filters = build_filters(
                location,
                min_rent,
                max_rent,
                property_types,
                bedrooms,
                bathrooms,
                amenities,
            )?;
            handle_search(&mut ctx, query, filters)
        }
        Some(Commands::View { ids }) => handle_view(&mut ctx, ids),
        Some(Commands::Fav { ids }) => handle_fav(&mut ctx, ids),
        Some(Commands::Lease(lease_cmd)) => handle_lease(&mut ctx, lease_cmd),
        Some(Commands::Export { out }) => handle_export(&ctx, out),
        Some(Commands::Import { paths }) => handle_import(&mut ctx, paths),
        Some(Commands::Doctor) => handle_doctor(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&mut ctx),
        None => handle_list(&mut ctx, false),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match std::env::var_os("RENTHUB_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let proj_dirs = ProjectDirs::from("com", "renthub", "renthub")
                .ok_or_else(|| RentHubError::Store("Could not determine data dir".to_string()))?;
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let config = RentHubConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir.clone());
    let paths = RentHubPaths { data: data_dir };
    let api = RentHubApi::new(store, paths);

    Ok(AppContext {
        api,
        config,
        verbose: cli.verbose,
    })
}

#[allow(clippy::too_many_arguments)]
fn build_filters(
    location: Option<String>,
    min_rent: Option<String>,
    max_rent: Option<String>,
    property_types: Vec<String>,
    bedrooms: Option<u32>,
    bathrooms: Option<u32>,
    amenities: Vec<String>,
) -> Result<SearchFilters> {
    let min_rent = min_rent.as_deref().map(parse_rent_bound).transpose()?;
    let max_rent = max_rent.as_deref().map(parse_rent_bound).transpose()?;
    let property_types = property_types
        .iter()
        .map(|t| parse_property_type(t))
        .collect::<Result<Vec<_>>>()?;

    Ok(SearchFilters {
        location,
        min_rent,
        max_rent,
        property_types,
        bedrooms,
        bathrooms,
        amenities,
    })
}

fn parse_date(input: &str) -> Result<NaiveDate> {
    input
        .parse()
        .map_err(|_| RentHubError::Validation(format!("'{}' is not a valid date (YYYY-MM-DD)", input)))
}

fn handle_list(ctx: &mut AppContext, featured: bool) -> Result<()> {
    let result = ctx.api.list_properties(featured)?;
    print_properties(&result.properties, ctx);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, query: Option<String>, filters: SearchFilters) -> Result<()> {
    let result = ctx.api.search_properties(query.as_deref(), &filters)?;
    print_properties(&result.properties, ctx);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.view_properties(&ids)?;
    print_full_properties(&result.properties, ctx);
    print_messages(&result.messages);
    Ok(())
}

fn handle_fav(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    if !ids.is_empty() {
        let result = ctx.api.toggle_favorites(&ids)?;
        print_messages(&result.messages);
    }
    let result = ctx.api.list_favorites()?;
    if result.properties.is_empty() {
        println!("No favorite properties in this session.");
    } else {
        print_properties(&result.properties, ctx);
    }
    Ok(())
}

fn handle_lease(ctx: &mut AppContext, cmd: LeaseCommands) -> Result<()> {
    match cmd {
        LeaseCommands::List => {
            let result = ctx.api.list_leases()?;
            print_leases(&result.leases, ctx);
            print_messages(&result.messages);
        }
        LeaseCommands::Show { id } => {
            let result = ctx.api.show_lease(&id)?;
            if let Some(lease) = result.leases.first() {
                print_full_lease(lease, ctx);
            }
            print_messages(&result.messages);
        }
        LeaseCommands::New {
            property,
            tenant,
            start,
            end,
            rent,
            deposit,
            terms,
        } => {
            let terms = match terms {
                Some(t) => t,
                None => edit_terms("new", DEFAULT_TERMS)?,
            };
            let params = DraftParams {
                property_id: property,
                tenant_id: tenant,
                start_date: parse_date(&start)?,
                end_date: parse_date(&end)?,
                monthly_rent: rent,
                security_deposit: deposit,
                terms,
            };
            let result = ctx.api.draft_lease(params)?;
            print_messages(&result.messages);
        }
        LeaseCommands::Edit { id, terms } => {
            let terms = match terms {
                Some(t) => t,
                None => {
                    let current = ctx.api.show_lease(&id)?;
                    let existing = current
                        .leases
                        .first()
                        .map(|l| l.terms.clone())
                        .unwrap_or_default();
                    edit_terms(&id, &existing)?
                }
            };
            let result = ctx.api.edit_lease(&id, terms)?;
            print_messages(&result.messages);
        }
        LeaseCommands::Submit { id } => transition(ctx, &id, LeaseAction::Submit)?,
        LeaseCommands::Approve { id } => transition(ctx, &id, LeaseAction::Approve)?,
        LeaseCommands::Sign { id } => transition(ctx, &id, LeaseAction::Sign)?,
        LeaseCommands::Activate { id } => transition(ctx, &id, LeaseAction::Activate)?,
        LeaseCommands::Terminate { id } => transition(ctx, &id, LeaseAction::Terminate)?,
        LeaseCommands::Download { id, out } => {
            let result = ctx.api.download_lease(&id, out)?;
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn transition(ctx: &mut AppContext, id: &str, action: LeaseAction) -> Result<()> {
    let result = ctx.api.transition_lease(id, action)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, out: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export(out)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, paths: Vec<PathBuf>) -> Result<()> {
    let result = ctx.api.import(paths)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_doctor(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.doctor()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("currency = {}", config.currency);
        println!("date-format = {}", config.date_format);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

const DEFAULT_TERMS: &str = "Standard lease agreement terms and conditions...";

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const FEATURED_MARKER: &str = "★";

fn money(ctx: &AppContext, amount: u32) -> String {
    format!("{}{}", ctx.config.currency, amount)
}

fn date(ctx: &AppContext, d: NaiveDate) -> String {
    d.format(&ctx.config.date_format).to_string()
}

fn print_properties(properties: &[Property], ctx: &AppContext) {
    if properties.is_empty() {
        println!("No properties found.");
        return;
    }

    for property in properties {
        let marker = if property.featured {
            format!("{} ", FEATURED_MARKER.yellow())
        } else {
            "  ".to_string()
        };

        let id_str = format!("{}. ", property.id);
        let summary = format!(
            "{} — {}, {} · {} · {}bd/{}ba",
            property.title,
            property.location.city,
            property.location.state,
            property.property_type,
            property.bedrooms,
            property.bathrooms
        );
        let rent = format!("{}/mo", money(ctx, property.rent));

        let fixed_width = 2 + id_str.width() + rent.width() + 2 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let summary_display = truncate_to_width(&summary, available);
        let padding = available.saturating_sub(summary_display.width());

        println!(
            "{}{}{}{}  {}{}",
            marker,
            id_str,
            summary_display,
            " ".repeat(padding),
            rent.green(),
            format_time_ago(property.created_at).dimmed()
        );

        if ctx.verbose {
            println!("      {}", property.description.dimmed());
        }
    }
}

fn print_full_properties(properties: &[Property], ctx: &AppContext) {
    for (i, property) in properties.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        let featured = if property.featured {
            format!(" {}", FEATURED_MARKER.yellow())
        } else {
            String::new()
        };
        println!(
            "{} {}{}",
            property.id.yellow(),
            property.title.bold(),
            featured
        );
        println!("--------------------------------");
        println!("{}", property.description);
        println!();
        println!(
            "{} {}, {}, {} {}",
            "Address:".dimmed(),
            property.location.address,
            property.location.city,
            property.location.state,
            property.location.zip
        );
        println!(
            "{} {} · {} sq ft · {} bd · {} ba",
            "Layout:".dimmed(),
            property.property_type,
            property.area,
            property.bedrooms,
            property.bathrooms
        );
        println!(
            "{} {}/mo, {} deposit",
            "Rent:".dimmed(),
            money(ctx, property.rent),
            money(ctx, property.deposit)
        );
        println!("{} {}", "Amenities:".dimmed(), property.amenities.join(", "));
        let availability = if property.availability.available {
            format!("available from {}", date(ctx, property.availability.available_from))
        } else {
            "not available".to_string()
        };
        println!("{} {}", "Availability:".dimmed(), availability);
        println!(
            "{} {} <{}> {}",
            "Landlord:".dimmed(),
            property.landlord.name,
            property.landlord.email,
            property.landlord.phone
        );
    }
}

fn status_badge(lease: &LeaseAgreement) -> ColoredString {
    use renthub::model::LeaseStatus::*;
    let label = lease.status.label();
    match lease.status {
        Draft => label.dimmed(),
        PendingApproval => label.yellow(),
        Approved | Signed => label.cyan(),
        Active => label.green(),
        Terminated => label.red(),
    }
}

fn print_leases(leases: &[LeaseAgreement], ctx: &AppContext) {
    if leases.is_empty() {
        println!("No lease agreements found.");
        return;
    }

    for lease in leases {
        println!(
            "{}  property {} · tenant {} · {} – {} · {}/mo  [{}]",
            lease.id.yellow(),
            lease.property_id,
            lease.tenant_id,
            date(ctx, lease.start_date),
            date(ctx, lease.end_date),
            money(ctx, lease.monthly_rent),
            status_badge(lease)
        );
    }
}

fn signature_status(signature: Option<&renthub::model::Signature>) -> ColoredString {
    match signature {
        Some(s) if s.signed => "Signed".green(),
        _ => "Pending".dimmed(),
    }
}

fn print_full_lease(lease: &LeaseAgreement, ctx: &AppContext) {
    println!(
        "{} {}  [{}]",
        "Lease Agreement".bold(),
        format!("#{}", lease.id).yellow(),
        status_badge(lease)
    );
    println!("--------------------------------");
    println!("{} {}", "Property:".dimmed(), lease.property_id);
    println!(
        "{} {} (landlord {})",
        "Tenant:".dimmed(),
        lease.tenant_id,
        lease.landlord_id
    );
    println!(
        "{} {} through {}",
        "Term:".dimmed(),
        date(ctx, lease.start_date),
        date(ctx, lease.end_date)
    );
    println!(
        "{} {}/mo, {} deposit",
        "Rent:".dimmed(),
        money(ctx, lease.monthly_rent),
        money(ctx, lease.security_deposit)
    );
    println!(
        "{} landlord: {} · tenant: {}",
        "Signatures:".dimmed(),
        signature_status(lease.signatures.landlord.as_ref()),
        signature_status(lease.signatures.tenant.as_ref())
    );
    println!();
    println!("{}", lease.terms);

    let actions = allowed_actions(lease.status);
    if actions.is_empty() {
        println!("\n{}", "No further actions available.".dimmed());
    } else {
        let names: Vec<String> = actions.iter().map(|a| a.to_string()).collect();
        println!("\n{} {}", "Available actions:".dimmed(), names.join(", "));
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
