//! Juris admin CLI — inspect and evaluate the platform's permission model.
//!
//! # Commands
//!
//! - `juris permissions` — the permission catalog (`id` + display name)
//! - `juris routes` — admin routes with required permission and description
//! - `juris matrix` — role × permission grant overview
//! - `juris check --role EDITOR [--grant manage_media] <permission>` —
//!   evaluate a single permission for a hypothetical actor
//! - `juris route-check [--role ADMIN] <route>` — evaluate route access
//!   (omit `--role` to check as an anonymous caller)
//! - `juris users` — the seeded demo directory
//!
//! Pass `--json` for machine-readable output, `-d` for debug logging.
//! Log filtering honors `RUST_LOG` when set.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use juris_auth::{AccessControl, Actor, Permission, Role};
use juris_directory::{ActorDirectory, InMemoryDirectory};
use std::collections::BTreeMap;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Juris admin platform inspection tool.
#[derive(Parser, Debug)]
#[command(name = "juris")]
#[command(version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Emit JSON instead of aligned text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the permission catalog
    Permissions,
    /// List admin routes with their required permissions
    Routes,
    /// Print the role-by-role grant overview
    Matrix,
    /// Check whether a role (plus optional extra grants) holds a permission
    Check {
        /// Role of the hypothetical actor
        #[arg(long)]
        role: Role,
        /// Extra permission overrides, repeatable
        #[arg(long = "grant", value_name = "PERMISSION")]
        grants: Vec<String>,
        /// Wire token of the permission to check, e.g. manage_posts
        permission: String,
    },
    /// Check whether a role may access an admin route
    RouteCheck {
        /// Role of the hypothetical actor; omit to check anonymously
        #[arg(long)]
        role: Option<Role>,
        /// Route path, e.g. /admin/roles
        route: String,
    },
    /// List the seeded demo users
    Users,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.debug);
    debug!(command = ?args.command, "dispatch");

    let control = AccessControl::new();
    match args.command {
        Command::Permissions => permissions(&control, args.json),
        Command::Routes => routes(&control, args.json),
        Command::Matrix => matrix(args.json),
        Command::Check {
            role,
            grants,
            permission,
        } => check(&control, role, &grants, &permission, args.json),
        Command::RouteCheck { role, route } => route_check(&control, role, &route, args.json),
        Command::Users => users(args.json),
    }
}

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn permissions(control: &AccessControl, json: bool) -> Result<()> {
    let entries = control.permissions();
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in entries {
            println!("{:<24} {}", entry.id, entry.name);
        }
    }
    Ok(())
}

fn routes(control: &AccessControl, json: bool) -> Result<()> {
    let listing = control.route_permissions();
    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        for row in listing {
            println!("{:<28} {:<24} {}", row.route, row.permission, row.description);
        }
    }
    Ok(())
}

fn matrix(json: bool) -> Result<()> {
    if json {
        let map: BTreeMap<&str, Vec<&str>> = Role::ALL
            .iter()
            .map(|role| (role.as_str(), role.grants().tokens()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        for role in Role::ALL {
            let grants = role.grants();
            let summary = if grants == Permission::all() {
                "(all permissions)".to_string()
            } else {
                grants.tokens().join(", ")
            };
            println!("{:<12} {:<12} {summary}", role.as_str(), role.label());
        }
    }
    Ok(())
}

fn check(
    control: &AccessControl,
    role: Role,
    grants: &[String],
    permission: &str,
    json: bool,
) -> Result<()> {
    let Some(permission) = Permission::from_token(permission) else {
        bail!("unknown permission: {permission}");
    };
    let overrides = parse_grants(grants)?;
    let actor = Actor::new("cli-probe", "probe@juris.example", role).with_overrides(overrides);
    let allowed = control.has_permission(Some(&actor), permission);

    print_verdict(json, allowed)
}

fn route_check(
    control: &AccessControl,
    role: Option<Role>,
    route: &str,
    json: bool,
) -> Result<()> {
    let actor = role.map(|r| Actor::new("cli-probe", "probe@juris.example", r));
    let allowed = control.has_route_permission(actor.as_ref(), route);

    print_verdict(json, allowed)
}

fn print_verdict(json: bool, allowed: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::json!({ "allowed": allowed }));
    } else {
        println!("{}", if allowed { "allowed" } else { "denied" });
    }
    Ok(())
}

fn users(json: bool) -> Result<()> {
    let dir = InMemoryDirectory::seeded();
    let actors = dir.list();
    if json {
        println!("{}", serde_json::to_string_pretty(&actors)?);
    } else {
        for actor in actors {
            println!(
                "{:<36} {:<12} {:<24} {}",
                actor.id, actor.role, actor.email, actor.name
            );
        }
    }
    Ok(())
}

fn parse_grants(tokens: &[String]) -> Result<Permission> {
    let mut set = Permission::empty();
    for token in tokens {
        match Permission::from_token(token) {
            Some(p) => set |= p,
            None => bail!("unknown permission: {token}"),
        }
    }
    Ok(set)
}
