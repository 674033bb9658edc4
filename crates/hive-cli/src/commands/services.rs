use hive_core::catalog::{SERVICES, Service, find_service};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ServicesArgs;
use crate::output::{Table, output};

/// Handle `hive services`.
pub fn handle(args: &ServicesArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    match args.title.as_deref() {
        None => output(&SERVICES, flags.format, |services| catalog_table(services)),
        Some(prefix) => {
            let Some(service) = find_service(prefix) else {
                anyhow::bail!("no service title starts with '{prefix}'");
            };
            output(service, flags.format, detail_table)
        }
    }
}

fn catalog_table(services: &[Service]) -> Table {
    let mut table = Table::new(&["service", "technologies"]);
    for service in services {
        table.row(vec![
            service.title.to_string(),
            service.technologies.join(", "),
        ]);
    }
    table
}

fn detail_table(service: &Service) -> Table {
    let mut table = Table::new(&["includes"])
        .caption(service.title)
        .caption(service.description);
    for feature in service.features {
        table.row(vec![(*feature).to_string()]);
    }
    table
}
