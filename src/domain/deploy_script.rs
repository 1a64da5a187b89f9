//! Deploy script rendering.

use minijinja::{Environment, context};

use super::AppError;

const TEMPLATE_NAME: &str = "deploy_services.sh";
const TEMPLATE: &str = include_str!("../assets/deploy_services.sh.j2");

/// Render the deploy script for `services`, kept in input order and unescaped.
pub fn render(services: &[String]) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template(TEMPLATE_NAME, TEMPLATE)?;

    let template = env.get_template(TEMPLATE_NAME)?;
    Ok(template.render(context! { services => services })?)
}
