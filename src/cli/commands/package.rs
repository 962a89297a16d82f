//! Package commands - lifecycle operations and package resolution

use anyhow::bail;

use crate::client::ZmfClient;
use crate::config::read_config;

/// Audit a package
pub fn audit(client: &ZmfClient, package: &str) -> anyhow::Result<()> {
    client.audit(package)?;
    println!("audit submitted for {package}");
    Ok(())
}

/// Promote a package
pub fn promote(
    client: &ZmfClient,
    package: &str,
    site: &str,
    level: &str,
    name: Option<&str>,
) -> anyhow::Result<()> {
    client.promote(package, site, level, name)?;
    println!("promote submitted for {package} to {site}/{level}");
    Ok(())
}

/// Demote a package
pub fn demote(
    client: &ZmfClient,
    package: &str,
    site: &str,
    level: &str,
    name: Option<&str>,
) -> anyhow::Result<()> {
    client.demote(package, site, level, name)?;
    println!("demote submitted for {package} from {site}/{level}");
    Ok(())
}

/// Freeze a package
pub fn freeze(client: &ZmfClient, package: &str) -> anyhow::Result<()> {
    client.freeze(package)?;
    println!("froze {package}");
    Ok(())
}

/// Revert a package
pub fn revert(client: &ZmfClient, package: &str) -> anyhow::Result<()> {
    client.revert(package)?;
    println!("reverted {package}");
    Ok(())
}

/// Search for a package by application name and exact title; prints the id
/// of the best match
pub fn search(client: &ZmfClient, app: &str, title: &str) -> anyhow::Result<()> {
    match client.search_package(app, title)? {
        Some(package) => {
            println!("{package}");
            Ok(())
        }
        None => bail!("no package of {app} matches title '{title}'"),
    }
}

/// Create a package from a config document; prints the new id
pub fn create(client: &ZmfClient, file: &str) -> anyhow::Result<()> {
    let config = read_config(file)?;
    let package = client.create_package(&config)?;
    println!("{package}");
    Ok(())
}

/// Resolve a package id from a config document; prints the id
pub fn get_package(client: &ZmfClient, file: &str) -> anyhow::Result<()> {
    let config = read_config(file)?;
    let package = client.get_package(&config)?;
    println!("{package}");
    Ok(())
}

/// Delete a package, or one component of it when `component` is given
pub fn delete(client: &ZmfClient, package: &str, component: Option<&str>) -> anyhow::Result<()> {
    match component {
        Some(component) => {
            client.delete_component(package, component)?;
            println!("deleted {component} from {package}");
        }
        None => {
            client.delete_package(package)?;
            println!("deleted {package}");
        }
    }
    Ok(())
}
