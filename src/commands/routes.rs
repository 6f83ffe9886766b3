use anyhow::{Result, bail};

use crate::routes::Route;

/// List the route table, or resolve a single path against it.
pub fn routes(path: Option<&str>) -> Result<()> {
    match path {
        Some(path) => match Route::from_path(path) {
            Some(route) => println!("{:?} {}", route, route.path()),
            None => bail!("No route for {}", path),
        },
        None => {
            for route in Route::ALL {
                println!("{:<10} {:?}", route.path(), route);
            }
        }
    }
    Ok(())
}
