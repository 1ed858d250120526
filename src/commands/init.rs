use anyhow::Result;
use std::path::PathBuf;

use crate::io;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(".roimap.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Roimap Configuration

# Out-of-range metric handling: "clamp" pulls values into bounds,
# "strict" rejects them.
policy = "clamp"

# Override any coefficient of a built-in profile. Unlisted fields keep
# their built-in values.
#
# [profiles.accounting.formulas]
# family = "accounting"
# base_breach_prob = 0.30
# bec_cost = 129000.0

# Register another vertical of an existing formula family:
#
# [profiles.bookkeeping]
# name = "Bookkeeping Practices"
#
# [[profiles.bookkeeping.metrics]]
# key = "employees"
# label = "Number of Employees"
# min = 1.0
# max = 50.0
# default = 5.0
# unit = "count"
#
# [profiles.bookkeeping.formulas]
# family = "accounting"
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created .roimap.toml configuration file");

    Ok(())
}
