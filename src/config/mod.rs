/*!
Configuration of a solver.

All configuration for a solver is contained within a [Config].
Each option is a [ConfigOption], which pairs a value with a name and bounds, so that requests (e.g. from the CLI) may be checked before being applied.

```rust
# use molecular_sat::config::Config;
let mut config = Config::default();

assert!(config.encoding_attempts.set(512));
assert!(!config.pcr_error_rate.set(1.5));
assert_eq!(config.pcr_error_rate.value, 0.001);
```
*/

mod config_option;
pub use config_option::ConfigOption;

/// Representation for the probability of a copying error, per base.
pub type ErrorRate = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The number of blocks drawn for a literal before the encoding space is taken to be exhausted.
    pub encoding_attempts: ConfigOption<u32>,

    /// The seed of the default source of randomness.
    pub seed: ConfigOption<u64>,

    /// Keep the tube of each stage of a solve, rather than only the surviving tube.
    pub retain_stages: ConfigOption<bool>,

    /// The number of cycles of a PCR simulation.
    pub pcr_cycles: ConfigOption<u32>,

    /// The probability of a copying error for each base synthesized during a PCR simulation.
    pub pcr_error_rate: ConfigOption<ErrorRate>,
}

impl Default for Config {
    /// With the default attempt count the chance of failing to encode a formula of (the maximum of) sixteen variables is negligible.
    fn default() -> Self {
        Config {
            encoding_attempts: ConfigOption {
                name: "encoding_attempts",
                min: 1,
                max: u32::MAX,
                value: 4096,
            },

            seed: ConfigOption {
                name: "seed",
                min: u64::MIN,
                max: u64::MAX,
                value: 0,
            },

            retain_stages: ConfigOption {
                name: "retain_stages",
                min: false,
                max: true,
                value: false,
            },

            pcr_cycles: ConfigOption {
                name: "pcr_cycles",
                min: 0,
                max: 20,
                value: 1,
            },

            pcr_error_rate: ConfigOption {
                name: "pcr_error_rate",
                min: 0.0,
                max: 1.0,
                value: 0.001,
            },
        }
    }
}
