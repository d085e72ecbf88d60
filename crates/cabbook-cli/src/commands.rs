//! Command handlers

use cabbook_app::advisory::{pickup_date_advisory, today};
use cabbook_app::config::{Config, DispatchMode, ResubmitPolicy};
use cabbook_app::dispatcher::build_dispatcher;
use cabbook_app::session::BookingSession;
use cabbook_domain::{
    BookingComposer, BookingRequest, BusinessContact, DEFAULT_PASSENGERS, MAX_PASSENGERS,
};
use cabbook_types::{Error, OutputFormat, Result};
use tracing::debug;

use crate::cli::{Cli, Commands, FormArgs};
use crate::output::{output_preview, output_receipt, output_vehicles};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Vehicles => output_vehicles(output_format),

        Commands::Preview { form } => cmd_preview(form, output_format),

        Commands::Book { form, dry_run } => cmd_book(&config, form, *dry_run, output_format),

        Commands::Config {
            show,
            set_policy,
            set_dispatch,
            set_opener,
            set_output,
            reset,
        } => cmd_config(
            config,
            *show,
            *set_policy,
            *set_dispatch,
            set_opener.clone(),
            *set_output,
            *reset,
        ),
    }
}

/// Input gate the form applies before submit: required fields and the
/// passenger range of the number input
fn require_complete(request: &BookingRequest) -> Result<()> {
    let missing = request.missing_required();
    if !missing.is_empty() {
        let names: Vec<_> = missing.iter().map(|f| f.name()).collect();
        return Err(Error::MissingRequired(names.join(", ")));
    }

    if !(DEFAULT_PASSENGERS..=MAX_PASSENGERS).contains(&request.passengers) {
        return Err(Error::PassengersOutOfRange(
            request.passengers,
            DEFAULT_PASSENGERS,
            MAX_PASSENGERS,
        ));
    }

    Ok(())
}

fn cmd_preview(form: &FormArgs, output_format: OutputFormat) -> Result<()> {
    let mut request = BookingRequest::default();
    for (field, raw) in form.field_inputs() {
        request = request.update_field(field, raw)?;
    }
    require_complete(&request)?;
    pickup_date_advisory(&request.pickup_date, today());

    let result = BookingComposer::new(BusinessContact::default()).compose(&request);
    output_preview(output_format, &request, &result)
}

fn cmd_book(
    config: &Config,
    form: &FormArgs,
    dry_run: bool,
    output_format: OutputFormat,
) -> Result<()> {
    let dispatcher = build_dispatcher(config, dry_run);
    let mut session = BookingSession::new(
        BookingComposer::new(BusinessContact::default()),
        dispatcher,
        config.resubmit_policy,
    );

    for (field, raw) in form.field_inputs() {
        session.update_field(field, raw)?;
    }
    require_complete(session.request())?;
    pickup_date_advisory(&session.request().pickup_date, today());

    debug!(state = ?session.state(), "submitting booking");
    let receipt = session.submit()?;
    output_receipt(output_format, &receipt)
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_policy: Option<ResubmitPolicy>,
    set_dispatch: Option<DispatchMode>,
    set_opener: Option<String>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut changed = false;

    if let Some(policy) = set_policy {
        config.resubmit_policy = policy;
        changed = true;
    }

    if let Some(mode) = set_dispatch {
        config.dispatch_mode = mode;
        changed = true;
    }

    if let Some(opener) = set_opener {
        config.opener_command = if opener.trim().is_empty() {
            None
        } else {
            Some(opener)
        };
        changed = true;
    }

    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}
