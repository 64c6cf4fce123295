use crate::api;
use crate::config::{ExpiryPolicy, ScoutConfig};
use crate::engine::Engine;
use crate::types::Site;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "freebie-scout",
    version,
    about = "Free course listings with resolved coupons (JSON only)"
)]
pub struct Cli {
    #[command(subcommand)]
    cmd: Command,

    /// Keep courses whose coupon could not be resolved, flagged `expired`
    #[arg(long, global = true)]
    keep_expired: bool,

    /// Skip all randomized delays between requests
    #[arg(long, global = true)]
    no_pacing: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// No logging at all
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// udemyfreebies catalog page
    Courses(PageArgs),
    /// udemyfreebies search
    Search(SearchArgs),
    /// couponscorpion catalog page
    Coupons(PageArgs),
    /// couponscorpion search
    CouponsSearch(SearchArgs),
    /// Any listing URL
    Listing(ListingArgs),
    /// Resolve one course detail page
    Coupon { detail_url: String },
}

#[derive(Args)]
struct PageArgs {
    #[arg(long, default_value_t = 1)]
    page: u32,
}

#[derive(Args)]
struct SearchArgs {
    query: String,
    #[arg(long, default_value_t = 1)]
    page: u32,
}

#[derive(Args)]
struct ListingArgs {
    url: String,
    #[arg(long, value_enum, default_value_t = Site::Udemyfreebies)]
    site: Site,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let mut cfg = ScoutConfig::from_env().context("reading configuration")?;
    if cli.keep_expired {
        cfg = cfg.with_expiry_policy(ExpiryPolicy::Flag);
    }
    if cli.no_pacing {
        cfg = cfg.without_pacing();
    }

    let engine = Engine::new(cfg).context("building http client")?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting tokio runtime")?;

    let out = runtime.block_on(dispatch(&engine, cli.cmd));
    print_json(&out)
}

async fn dispatch(engine: &Engine, cmd: Command) -> Value {
    match cmd {
        Command::Courses(PageArgs { page }) => api::catalog(engine, Site::Udemyfreebies, page).await,
        Command::Search(SearchArgs { query, page }) => {
            api::search(engine, Site::Udemyfreebies, &query, page).await
        }
        Command::Coupons(PageArgs { page }) => {
            api::catalog(engine, Site::Couponscorpion, page).await
        }
        Command::CouponsSearch(SearchArgs { query, page }) => {
            api::search(engine, Site::Couponscorpion, &query, page).await
        }
        Command::Listing(ListingArgs { url, site }) => {
            api::listing_for_url(engine, &url, site == Site::Couponscorpion).await
        }
        Command::Coupon { detail_url } => api::coupon_response(engine, &detail_url).await,
    }
}

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let filter = if verbose {
        EnvFilter::new("freebie_scout=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("freebie_scout=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn print_json(val: &Value) -> Result<()> {
    // pretty JSON output
    println!("{}", serde_json::to_string_pretty(val)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subcommands_and_global_flags() {
        let cli = Cli::try_parse_from([
            "freebie-scout",
            "coupons-search",
            "rust",
            "--page",
            "3",
            "--keep-expired",
        ])
        .unwrap();
        assert!(cli.keep_expired);
        assert!(!cli.no_pacing);
        match cli.cmd {
            Command::CouponsSearch(SearchArgs { query, page }) => {
                assert_eq!(query, "rust");
                assert_eq!(page, 3);
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn listing_site_defaults_to_udemyfreebies() {
        let cli = Cli::try_parse_from([
            "freebie-scout",
            "listing",
            "https://couponscorpion.com/page/2/",
        ])
        .unwrap();
        match cli.cmd {
            Command::Listing(args) => assert_eq!(args.site, Site::Udemyfreebies),
            _ => panic!("wrong subcommand"),
        }

        let cli = Cli::try_parse_from([
            "freebie-scout",
            "--no-pacing",
            "listing",
            "https://couponscorpion.com/page/2/",
            "--site",
            "couponscorpion",
        ])
        .unwrap();
        assert!(cli.no_pacing);
        match cli.cmd {
            Command::Listing(args) => assert_eq!(args.site, Site::Couponscorpion),
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn courses_page_defaults_to_one() {
        let cli = Cli::try_parse_from(["freebie-scout", "courses"]).unwrap();
        assert!(matches!(cli.cmd, Command::Courses(PageArgs { page: 1 })));
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["freebie-scout", "-v", "-q", "courses"]).is_err());
    }
}
