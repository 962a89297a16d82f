//! Component commands - checkin, build, scratch and the component queries

use crate::client::ZmfClient;
use crate::payload::group_by_type;

use super::print_result;

/// Checkin components from a PDS
pub fn checkin(
    client: &ZmfClient,
    package: &str,
    pds: &str,
    components: &[String],
) -> anyhow::Result<()> {
    client.checkin(package, pds, components)?;
    let groups = group_by_type(components);
    println!(
        "checked in {} component(s) in {} group(s)",
        components.len(),
        groups.len()
    );
    Ok(())
}

/// Build components
pub fn build(
    client: &ZmfClient,
    package: &str,
    components: &[String],
    build_proc: &str,
    language: &str,
) -> anyhow::Result<()> {
    client.build(package, components, build_proc, language)?;
    println!("build submitted for {} component(s)", components.len());
    Ok(())
}

/// Scratch components
pub fn scratch(client: &ZmfClient, package: &str, components: &[String]) -> anyhow::Result<()> {
    client.scratch(package, components)?;
    println!("scratched {} component(s)", components.len());
    Ok(())
}

/// List the components of a package
pub fn list(client: &ZmfClient, package: &str) -> anyhow::Result<()> {
    let result = client.components(package)?;
    print_result(result.as_ref())
}

/// Load detail records for one component
pub fn load(client: &ZmfClient, package: &str, component: &str) -> anyhow::Result<()> {
    let result = client.load(package, component)?;
    print_result(result.as_ref())
}

/// List the packages a component appears in
pub fn packagelist(client: &ZmfClient, component: &str) -> anyhow::Result<()> {
    let result = client.packagelist(component)?;
    print_result(result.as_ref())
}

/// Browse a component's source and print it verbatim
pub fn browse(client: &ZmfClient, package: &str, component: &str) -> anyhow::Result<()> {
    let body = client.browse(package, component)?;
    print!("{body}");
    Ok(())
}
