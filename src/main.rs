use std::env;
use std::ffi::OsStr;

use anyhow::Context as _;
use chrono::Datelike;
use log::{error, info};
use seahorse::{App, Context, Flag, FlagType};

use month_sheet::calendar::LeaveDays;
use month_sheet::generate_time_sheet;
use month_sheet::time::Year;

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    run();
}

mod seahorse_exts {
    use anyhow::Context as _;
    use seahorse::error::FlagError;
    use seahorse::Context;

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn required_float_flag(&self, name: &str) -> Result<f64, anyhow::Error> {
            self.context()
                .float_flag(name)
                .with_context(|| anyhow::anyhow!("missing required flag \"--{}\"", name))
        }

        fn required_int_flag(&self, name: &str) -> Result<isize, anyhow::Error> {
            self.context()
                .int_flag(name)
                .with_context(|| anyhow::anyhow!("missing required flag \"--{}\"", name))
        }

        /// Returns `None` if the flag is absent. A flag that is present
        /// but malformed is still an error.
        fn optional_int_flag(&self, name: &str) -> Result<Option<isize>, anyhow::Error> {
            match self.context().int_flag(name) {
                Ok(value) => Ok(Some(value)),
                Err(FlagError::NotFound) => Ok(None),
                Err(e) => {
                    Err(e).with_context(|| anyhow::anyhow!("invalid value for flag \"--{}\"", name))
                }
            }
        }

        fn optional_string_flag(&self, name: &str) -> Result<Option<String>, anyhow::Error> {
            match self.context().string_flag(name) {
                Ok(value) => Ok(Some(value)),
                Err(FlagError::NotFound) => Ok(None),
                Err(e) => {
                    Err(e).with_context(|| anyhow::anyhow!("invalid value for flag \"--{}\"", name))
                }
            }
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::ContextExt;

fn generate(context: &Context) -> anyhow::Result<()> {
    let total_hours = context.required_float_flag("hours")?;
    let max_hours = context.required_float_flag("max-hours")?;

    let month = usize::try_from(context.required_int_flag("month")?)
        .context("the month number cannot be negative")?;

    let year = match context.optional_int_flag("year")? {
        Some(year) => Year::new(usize::try_from(year).context("the year cannot be negative")?),
        None => {
            let year = Year::new(
                usize::try_from(chrono::Local::now().year())
                    .context("the system clock is set before the year 0")?,
            );
            info!("no --year given, assuming the current year {}", year);
            year
        }
    };

    let leave_count = context
        .optional_int_flag("leave")?
        .map(|count| {
            usize::try_from(count).context("the number of leave days cannot be negative")
        })
        .transpose()?;

    let leave_days = context
        .optional_string_flag("leave-days")?
        .map(|days| days.parse::<LeaveDays>())
        .transpose()?;

    let sheet = generate_time_sheet(year, month, leave_count, leave_days, total_hours, max_hours)?;

    println!();
    println!("{}", sheet);

    Ok(())
}

fn run() {
    let args: Vec<String> = env::args().collect();

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!(
            "{} --hours 115.5 --max-hours 8 --leave 0 --month 3 [--year 2025]",
            args[0]
        ))
        .flag(
            Flag::new("hours", FlagType::Float)
                .description("Total hours worked in the month. Can be a decimal like `115.5`."),
        )
        .flag(
            Flag::new("max-hours", FlagType::Float)
                .description("Maximum hours for a single day. Snapped to the nearest half hour."),
        )
        .flag(
            Flag::new("leave", FlagType::Int)
                .description("[optional] Number of leave days taken in the month."),
        )
        .flag(
            Flag::new("leave-days", FlagType::String).description(
                "[optional] Comma-separated days on which leave was taken, e.g. `1,10,15`.",
            ),
        )
        .flag(Flag::new("month", FlagType::Int).description("Month number (1-12)."))
        .flag(
            Flag::new("year", FlagType::Int)
                .description("[optional] Year of the month. Default: the current year."),
        )
        .action(|context: &Context| {
            if let Err(e) = generate(context) {
                error!("{:?}", e);
                ::std::process::exit(1);
            }
        });

    app.run(args);
}
