use crate::cli::context;
use crate::core::errors::Result;
use crate::core::models::endpoints::AuthEndpoints;

/// Execute the `frontenv endpoints` command.
pub fn execute(env: Option<&str>) -> Result<()> {
    let project = context::load_project()?;
    let resolved = context::resolve(&project, env)?;
    let endpoints = AuthEndpoints::derive(resolved.config.auth0())?;

    println!("domain:    {}", endpoints.domain);
    println!("issuer:    {}", endpoints.issuer);
    println!("jwks:      {}", endpoints.jwks_url);
    println!("authorize: {}", endpoints.authorize_url);
    println!("logout:    {}", endpoints.logout_url);

    Ok(())
}
