//! `cfcli dns` — list, add and delete DNS records.

use anyhow::{bail, Result};
use cfcli_client::{
    CloudflareApi, CreateRecordRequest, DeleteRecordRequest, ListRecordsRequest, NewZoneRecord,
    ResolveZoneRequest, ZoneType,
};
use clap::{Args, Subcommand};

use crate::output;

#[derive(Args)]
pub struct DnsArgs {
    /// The domain whose zone the command operates on
    #[arg(short, long)]
    pub domain: String,

    #[command(subcommand)]
    pub command: DnsCommand,
}

#[derive(Subcommand)]
pub enum DnsCommand {
    /// List all DNS records
    List(ListArgs),
    /// Add a DNS record
    Add(AddArgs),
    /// Delete a DNS record
    Delete(DeleteArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// The name of the record to list
    #[arg(long)]
    pub name: Option<String>,
    /// The type of the record to list
    #[arg(long = "type")]
    pub record_type: Option<String>,
}

#[derive(Args)]
pub struct AddArgs {
    /// Name of the record
    #[arg(long)]
    pub name: String,
    /// Type of the record
    #[arg(long = "type")]
    pub record_type: String,
    /// Content of the record
    #[arg(long)]
    pub content: String,
    /// TTL of the record (1-86400)
    #[arg(long, default_value_t = 1)]
    pub ttl: u32,
    /// Proxied status of the record
    #[arg(long)]
    pub proxied: bool,
    /// Tags of the record
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,
    /// Comment of the record
    #[arg(long, default_value = "")]
    pub comment: String,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// The ID of the record to delete
    #[arg(long)]
    pub id: Option<String>,
    /// The name of the record to delete
    #[arg(long)]
    pub name: Option<String>,
    /// The type of the record to delete
    #[arg(long = "type")]
    pub record_type: Option<String>,
}

pub async fn run(client: &dyn CloudflareApi, args: DnsArgs) -> Result<()> {
    match args.command {
        DnsCommand::List(list_args) => list(client, &args.domain, list_args).await,
        DnsCommand::Add(add_args) => add(client, &args.domain, add_args).await,
        DnsCommand::Delete(delete_args) => delete(client, &args.domain, delete_args).await,
    }
}

async fn list(client: &dyn CloudflareApi, domain: &str, args: ListArgs) -> Result<()> {
    // Type validation happens before any network call.
    let record_type = args
        .record_type
        .as_deref()
        .map(str::parse::<ZoneType>)
        .transpose()?;

    let zone_id = resolve_zone(client, domain).await?;
    let records = client
        .zone_records(&ListRecordsRequest {
            zone_id,
            name: args
                .name
                .as_deref()
                .map(|name| entry_full_name(domain, name)),
            record_type,
        })
        .await?;

    print!("{}", output::record_table(&records));
    Ok(())
}

async fn add(client: &dyn CloudflareApi, domain: &str, args: AddArgs) -> Result<()> {
    if !(1..=86_400).contains(&args.ttl) {
        bail!("TTL must be between 1 and 86400");
    }
    let record_type: ZoneType = args.record_type.parse()?;

    let record = NewZoneRecord {
        id: None,
        record_type,
        name: entry_full_name(domain, &args.name),
        content: args.content,
        proxied: args.proxied,
        ttl: args.ttl,
        tags: args.tags,
        comment: args.comment,
    };

    let zone_id = resolve_zone(client, domain).await?;
    let created = client
        .add_zone_record(&CreateRecordRequest { zone_id, record })
        .await?;

    print!("{}", output::record_table(std::slice::from_ref(&created)));
    Ok(())
}

async fn delete(client: &dyn CloudflareApi, domain: &str, args: DeleteArgs) -> Result<()> {
    let zone_id = resolve_zone(client, domain).await?;

    let record_id = match args.id {
        Some(id) => id,
        None => {
            let (Some(name), Some(record_type)) = (args.name, args.record_type) else {
                bail!("either --id OR (--name AND --type) must be specified");
            };
            let record_type: ZoneType = record_type.parse()?;

            let records = client
                .zone_records(&ListRecordsRequest {
                    zone_id: zone_id.clone(),
                    name: Some(entry_full_name(domain, &name)),
                    record_type: Some(record_type),
                })
                .await?;

            if records.is_empty() {
                bail!("No records found");
            }
            if records.len() > 1 {
                print!("{}", ambiguous_delete_output(&records));
                return Ok(());
            }

            records[0].id.clone()
        }
    };

    client
        .delete_zone_record(&DeleteRecordRequest {
            zone_id,
            record_id: record_id.clone(),
        })
        .await?;

    print!(
        "{}",
        output::success_message(&format!("Record {record_id} deleted"))
    );
    Ok(())
}

async fn resolve_zone(client: &dyn CloudflareApi, domain: &str) -> Result<String> {
    Ok(client
        .zone_by_domain(&ResolveZoneRequest {
            domain: domain.to_string(),
        })
        .await?)
}

/// When a name/type pair matches several records, the candidates are
/// listed and the user is told to disambiguate with `--id`. The warning
/// brackets the table so it stays visible however long the listing is.
fn ambiguous_delete_output(records: &[cfcli_client::ZoneRecord]) -> String {
    let warning = output::warning_message(
        "Multiple records found, please specify the record utilizing the --id flag",
    );
    format!("{warning}{}{warning}", output::record_table(records))
}

/// Expand a record entry to its full name within the domain.
/// `@` and the empty string mean the apex.
fn entry_full_name(domain: &str, entry: &str) -> String {
    if entry == "@" || entry.is_empty() {
        domain.to_string()
    } else {
        format!("{entry}.{domain}")
    }
}
