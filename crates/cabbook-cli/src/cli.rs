//! CLI definition using clap

use cabbook_app::config::{DispatchMode, ResubmitPolicy};
use cabbook_domain::BookingField;
use cabbook_types::OutputFormat;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cabbook")]
#[command(version)]
#[command(about = "Compose taxi booking requests and send them by messaging app and mail")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Booking form fields
#[derive(Args, Debug, Clone)]
pub struct FormArgs {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// Customer phone number
    #[arg(long)]
    pub phone: String,

    /// Pickup location (e.g., "Bagdogra Airport")
    #[arg(long = "from")]
    pub pickup_location: String,

    /// Drop location (e.g., "Darjeeling Mall Road")
    #[arg(long = "to")]
    pub drop_location: String,

    /// Pickup date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Pickup time (e.g., "09:00")
    #[arg(long)]
    pub time: String,

    /// Number of passengers (1-16)
    #[arg(long, short = 'p', allow_hyphen_values = true)]
    pub passengers: String,

    /// Vehicle type key or id (e.g., SEDAN, innova-crysta)
    #[arg(long, default_value = "SEDAN")]
    pub vehicle: String,

    /// Additional requirements
    #[arg(long, short = 'm')]
    pub message: Option<String>,
}

impl FormArgs {
    /// Raw input for each field, in form order
    pub fn field_inputs(&self) -> Vec<(BookingField, &str)> {
        vec![
            (BookingField::FullName, self.name.as_str()),
            (BookingField::Phone, self.phone.as_str()),
            (BookingField::PickupLocation, self.pickup_location.as_str()),
            (BookingField::DropLocation, self.drop_location.as_str()),
            (BookingField::PickupDate, self.date.as_str()),
            (BookingField::PickupTime, self.time.as_str()),
            (BookingField::Passengers, self.passengers.as_str()),
            (BookingField::VehicleType, self.vehicle.as_str()),
            (BookingField::Message, self.message.as_deref().unwrap_or("")),
        ]
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available vehicle types
    Vehicles,

    /// Compose a booking request and show it without sending
    Preview {
        #[command(flatten)]
        form: FormArgs,
    },

    /// Compose a booking request and send it to both channels
    Book {
        #[command(flatten)]
        form: FormArgs,

        /// Print the links instead of opening them (overrides config)
        #[arg(long)]
        dry_run: bool,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set behaviour after a booking is submitted
        #[arg(long)]
        set_policy: Option<ResubmitPolicy>,

        /// Set whether links are launched or printed
        #[arg(long)]
        set_dispatch: Option<DispatchMode>,

        /// Set opener command (empty string restores the platform default)
        #[arg(long)]
        set_opener: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_args() -> Vec<&'static str> {
        vec![
            "cabbook",
            "preview",
            "--name",
            "Raj Thapa",
            "--phone",
            "9812345678",
            "--from",
            "Bagdogra Airport",
            "--to",
            "Darjeeling Mall Road",
            "--date",
            "2024-06-01",
            "--time",
            "09:00",
            "--passengers",
            "3",
        ]
    }

    #[test]
    fn test_parse_preview() {
        let cli = Cli::try_parse_from(form_args()).unwrap();
        let Commands::Preview { form } = cli.command else {
            panic!("expected preview");
        };
        assert_eq!(form.vehicle, "SEDAN");
        assert!(form.message.is_none());
        assert_eq!(form.field_inputs().len(), 9);
        assert_eq!(form.field_inputs()[2], (BookingField::PickupLocation, "Bagdogra Airport"));
    }

    #[test]
    fn test_missing_required_arg() {
        let mut args = form_args();
        args.truncate(args.len() - 2);
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_book_dry_run_and_format() {
        let mut args = form_args();
        args[1] = "book";
        args.extend(["--dry-run", "-f", "json", "--vehicle", "innova-crysta"]);
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        let Commands::Book { form, dry_run } = cli.command else {
            panic!("expected book");
        };
        assert!(dry_run);
        assert_eq!(form.vehicle, "innova-crysta");
    }

    #[test]
    fn test_config_policy_values() {
        let cli = Cli::try_parse_from(["cabbook", "config", "--set-policy", "reset"]).unwrap();
        let Commands::Config { set_policy, .. } = cli.command else {
            panic!("expected config");
        };
        assert_eq!(set_policy, Some(ResubmitPolicy::Reset));
    }
}
