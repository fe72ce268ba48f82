use anyhow::bail;
use clap::{Parser, ValueEnum};
use inventory_codec::{parse, serialize, Inventory, InventoryCodec, OutputFormat};
use std::path::PathBuf;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "inventory-codec")]
#[command(about = "Parse and re-serialize Ansible-style INI inventory files")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the inventory file
    #[arg(value_name = "INVENTORY_FILE")]
    inventory_file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "ini")]
    output: OutputFormatCli,

    /// Write output to a file instead of stdout
    #[arg(short = 'f', long, value_name = "FILE")]
    out_file: Option<PathBuf>,

    /// List all hosts with their resolved connection fields
    #[arg(long)]
    list_hosts: bool,

    /// List all groups with host counts and children
    #[arg(long)]
    list_groups: bool,

    /// Verify the inventory survives a serialize/re-parse cycle
    #[arg(long)]
    check: bool,

    /// Enable verbose output
    #[arg(long)]
    verbose: bool,
}

#[derive(Clone, ValueEnum)]
enum OutputFormatCli {
    Ini,
    Json,
    Yaml,
}

impl From<OutputFormatCli> for OutputFormat {
    fn from(cli_format: OutputFormatCli) -> Self {
        match cli_format {
            OutputFormatCli::Ini => OutputFormat::Ini,
            OutputFormatCli::Json => OutputFormat::Json,
            OutputFormatCli::Yaml => OutputFormat::Yaml,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let inventory = InventoryCodec::load(&cli.inventory_file).await?;

    if cli.check {
        return handle_check(&inventory);
    }

    if cli.list_hosts {
        handle_list_hosts(&inventory);
        return Ok(());
    }

    if cli.list_groups {
        handle_list_groups(&inventory);
        return Ok(());
    }

    let rendered = render(&inventory, cli.output.into())?;
    match &cli.out_file {
        Some(path) => {
            tokio::fs::write(path, rendered).await?;
            info!(path = %path.display(), "wrote output file");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn handle_check(inventory: &Inventory) -> anyhow::Result<()> {
    let reparsed = parse(&serialize(inventory));
    if reparsed.structurally_equal(inventory) {
        println!("Round-trip check passed");
        Ok(())
    } else {
        error!("round-trip check failed: re-parsed model differs");
        bail!("Round-trip check failed");
    }
}

fn handle_list_hosts(inventory: &Inventory) {
    for host in inventory.all_hosts() {
        println!("{}:", host.name);
        println!("  address: {}", host.address());
        if let Some(port) = host.ansible_port {
            println!("  port: {port}");
        }
        if let Some(user) = &host.ansible_user {
            println!("  user: {user}");
        }
        if let Some(display_name) = &host.ext_display_name {
            println!("  display name: {display_name}");
        }
        for (key, value) in &host.raw_variables {
            println!("  {key}: {value}");
        }
    }
}

fn handle_list_groups(inventory: &Inventory) {
    if !inventory.ungrouped_hosts.is_empty() {
        println!("(ungrouped): {} host(s)", inventory.ungrouped_hosts.len());
    }
    for group in &inventory.groups {
        println!("{}: {} host(s)", group.name, group.hosts.len());
        if !group.children.is_empty() {
            println!("  children: {}", group.children.join(", "));
        }
        for (key, value) in &group.vars {
            println!("  {key}={value}");
        }
    }
}

fn render(inventory: &Inventory, format: OutputFormat) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Ini => serialize(inventory),
        OutputFormat::Json => serde_json::to_string_pretty(inventory)?,
        OutputFormat::Yaml => serde_yaml::to_string(inventory)?,
    };
    Ok(rendered)
}
