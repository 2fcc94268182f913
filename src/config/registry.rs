/*!
The registry of options, through which a [Config] may be revised.

The registry is a fixed catalog of [ConfigOption]s, one for each tunable parameter of the engine, in a fixed order.
Each option has:
- An identifier, from [OptionId], and a name.
- An inclusive range of permitted values.
- The (maximal) [state](SessionState) of a session in which the option may be set.
- A flag noting whether the option is eligible for automatic tuning.
- A setter (and getter) for the relevant field of a [Config].

Values are always [i64]s.
Fractional parameters are scaled by 100, and so `restart_inc` with value `125` revises [Config::restart_inc] to 1.25.

```rust
# use otter_ipasir::config::{registry, Config, RestartType};
let mut config = Config::default();

let restart_type = registry::lookup("restartType").unwrap();
assert_eq!(restart_type.min_max(), (0, 4));

assert!(restart_type.set(&mut config, 3).is_ok());
assert_eq!(config.restart_type, RestartType::Luby);

assert!(restart_type.set(&mut config, 5).is_err());
assert_eq!(config.restart_type, RestartType::Luby);

let restart_inc = registry::lookup("restart_inc").unwrap();
assert!(restart_inc.set(&mut config, 125).is_ok());
assert_eq!(config.restart_inc, 1.25);
```
*/

use crate::{
    config::{BranchStrategy, Config, PolarityMode, RestartType},
    session::SessionState,
    types::err::OptionError,
};

/// Identifiers of the options, in registry order.
///
/// Each identifier is the position of the corresponding option in [OPTIONS].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionId {
    BranchStrategySetup = 0,
    VarElimRatioPerIter,
    RestartType,
    PolarityMode,
    IncMaxTempLev2RedCls,
    GluePutLev0IfBelowOrEq,
    GluePutLev1IfBelowOrEq,
    EveryLev1Reduce,
    EveryLev2Reduce,
    DoBva,
    MaxTempLev2LearntClauses,
    NeverStopSearch,
    DoMinimRedMoreMore,
    MaxNumLitsMoreMoreRedMin,
    MaxGlueMoreMinim,
    OrigGlobalTimeoutMultiplier,
    NumConflictsOfSearchInc,
    MoreRedMinimLimitBinary,
    RestartInc,
    RestartFirst,
}

impl OptionId {
    /// The registry entry of the option.
    pub fn entry(self) -> &'static ConfigOption {
        &OPTIONS[self as usize]
    }
}

/// An entry of the registry.
pub struct ConfigOption {
    /// The identifier of the option.
    pub id: OptionId,

    /// The (unique) name of the option.
    pub name: &'static str,

    /// The minimum permitted value.
    pub min: i64,

    /// The maximum permitted value.
    pub max: i64,

    /// The maximal state of a session in which the option may be set.
    pub max_state: SessionState,

    /// Whether the option is eligible for use by automatic tuners.
    pub tunable: bool,

    setter: fn(&mut Config, i64),

    getter: fn(&Config) -> i64,
}

impl ConfigOption {
    /// The (inclusive) range of permitted values.
    pub fn min_max(&self) -> (i64, i64) {
        (self.min, self.max)
    }

    /// Whether `value` is within the range of the option.
    pub fn permits(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Sets the option on `config` to `value`, if the value is permitted.
    pub fn set(&self, config: &mut Config, value: i64) -> Result<(), OptionError> {
        if !self.permits(value) {
            return Err(OptionError::InvalidValue);
        }
        (self.setter)(config, value);
        Ok(())
    }

    /// The value of the option on `config`.
    pub fn get(&self, config: &Config) -> i64 {
        (self.getter)(config)
    }
}

impl std::fmt::Debug for ConfigOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigOption")
            .field("name", &self.name)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("max_state", &self.max_state)
            .field("tunable", &self.tunable)
            .finish()
    }
}

impl PartialEq for ConfigOption {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.min == other.min
            && self.max == other.max
            && self.max_state == other.max_state
            && self.tunable == other.tunable
    }
}

/// The count of options in the registry.
pub const OPTION_COUNT: usize = 20;

/// Scales a fractional parameter for the registry.
fn scaled(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Recovers a fractional parameter from the registry.
fn unscaled(value: i64) -> f64 {
    value as f64 / 100.0
}

/// The registry.
pub static OPTIONS: [ConfigOption; OPTION_COUNT] = [
    ConfigOption {
        id: OptionId::BranchStrategySetup,
        name: "branch_strategy_setup",
        min: BranchStrategy::MIN,
        max: BranchStrategy::MAX,
        max_state: SessionState::Config,
        tunable: true,
        setter: |config: &mut Config, value: i64| {
            if let Ok(strategy) = BranchStrategy::try_from(value) {
                config.branch_strategy = strategy
            }
        },
        getter: |config: &Config| config.branch_strategy as i64,
    },
    ConfigOption {
        id: OptionId::VarElimRatioPerIter,
        name: "varElimRatioPerIter",
        min: 10,
        max: 100,
        max_state: SessionState::Config,
        tunable: true,
        setter: |config: &mut Config, value: i64| config.var_elim_ratio_per_iter = unscaled(value),
        getter: |config: &Config| scaled(config.var_elim_ratio_per_iter),
    },
    ConfigOption {
        id: OptionId::RestartType,
        name: "restartType",
        min: RestartType::MIN,
        max: RestartType::MAX,
        max_state: SessionState::Config,
        tunable: true,
        setter: |config: &mut Config, value: i64| {
            if let Ok(restart_type) = RestartType::try_from(value) {
                config.restart_type = restart_type
            }
        },
        getter: |config: &Config| config.restart_type as i64,
    },
    ConfigOption {
        id: OptionId::PolarityMode,
        name: "polarity_mode",
        min: PolarityMode::MIN,
        max: PolarityMode::MAX,
        max_state: SessionState::Config,
        tunable: true,
        setter: |config: &mut Config, value: i64| {
            if let Ok(mode) = PolarityMode::try_from(value) {
                config.polarity_mode = mode
            }
        },
        getter: |config: &Config| config.polarity_mode as i64,
    },
    ConfigOption {
        id: OptionId::IncMaxTempLev2RedCls,
        name: "inc_max_temp_lev2_red_cls",
        min: 100,
        max: 104,
        max_state: SessionState::Config,
        tunable: true,
        setter: |config: &mut Config, value: i64| {
            config.inc_max_temp_lev2_red_cls = unscaled(value)
        },
        getter: |config: &Config| scaled(config.inc_max_temp_lev2_red_cls),
    },
    ConfigOption {
        id: OptionId::GluePutLev0IfBelowOrEq,
        name: "glue_put_lev0_if_below_or_eq",
        min: 0,
        max: 4,
        max_state: SessionState::Config,
        tunable: true,
        setter: |config: &mut Config, value: i64| {
            config.glue_put_lev0_if_below_or_eq = value as u32
        },
        getter: |config: &Config| config.glue_put_lev0_if_below_or_eq as i64,
    },
    ConfigOption {
        id: OptionId::GluePutLev1IfBelowOrEq,
        name: "glue_put_lev1_if_below_or_eq",
        min: 0,
        max: 6,
        max_state: SessionState::Config,
        tunable: true,
        setter: |config: &mut Config, value: i64| {
            config.glue_put_lev1_if_below_or_eq = value as u32
        },
        getter: |config: &Config| config.glue_put_lev1_if_below_or_eq as i64,
    },
    ConfigOption {
        id: OptionId::EveryLev1Reduce,
        name: "every_lev1_reduce",
        min: 1,
        max: 10000,
        max_state: SessionState::Config,
        tunable: true,
        setter: |config: &mut Config, value: i64| config.every_lev1_reduce = value as u32,
        getter: |config: &Config| config.every_lev1_reduce as i64,
    },
    ConfigOption {
        id: OptionId::EveryLev2Reduce,
        name: "every_lev2_reduce",
        min: 1,
        max: 15000,
        max_state: SessionState::Config,
        tunable: true,
        setter: |config: &mut Config, value: i64| config.every_lev2_reduce = value as u32,
        getter: |config: &Config| config.every_lev2_reduce as i64,
    },
    ConfigOption {
        id: OptionId::DoBva,
        name: "do_bva",
        min: 0,
        max: 1,
        max_state: SessionState::Config,
        tunable: true,
        setter: |config: &mut Config, value: i64| config.do_bva = value == 1,
        getter: |config: &Config| config.do_bva as i64,
    },
    ConfigOption {
        id: OptionId::MaxTempLev2LearntClauses,
        name: "max_temp_lev2_learnt_clauses",
        min: 10000,
        max: 30000,
        max_state: SessionState::Config,
        tunable: true,
        setter: |config: &mut Config, value: i64| {
            config.max_temp_lev2_learnt_clauses = value as u32
        },
        getter: |config: &Config| config.max_temp_lev2_learnt_clauses as i64,
    },
    ConfigOption {
        id: OptionId::NeverStopSearch,
        name: "never_stop_search",
        min: 0,
        max: 1,
        max_state: SessionState::Config,
        tunable: true,
        setter: |config: &mut Config, value: i64| config.never_stop_search = value == 1,
        getter: |config: &Config| config.never_stop_search as i64,
    },
    ConfigOption {
        id: OptionId::DoMinimRedMoreMore,
        name: "doMinimRedMoreMore",
        min: 0,
        max: 2,
        max_state: SessionState::Config,
        tunable: true,
        setter: |config: &mut Config, value: i64| config.do_minim_red_more_more = value as u32,
        getter: |config: &Config| config.do_minim_red_more_more as i64,
    },
    ConfigOption {
        id: OptionId::MaxNumLitsMoreMoreRedMin,
        name: "max_num_lits_more_more_red_min",
        min: 0,
        max: 20,
        max_state: SessionState::Config,
        tunable: true,
        setter: |config: &mut Config, value: i64| {
            config.max_num_lits_more_more_red_min = value as u32
        },
        getter: |config: &Config| config.max_num_lits_more_more_red_min as i64,
    },
    ConfigOption {
        id: OptionId::MaxGlueMoreMinim,
        name: "max_glue_more_minim",
        min: 0,
        max: 4,
        max_state: SessionState::Config,
        tunable: true,
        setter: |config: &mut Config, value: i64| config.max_glue_more_minim = value as u32,
        getter: |config: &Config| config.max_glue_more_minim as i64,
    },
    ConfigOption {
        id: OptionId::OrigGlobalTimeoutMultiplier,
        name: "orig_global_timeout_multiplier",
        min: 0,
        max: 5,
        max_state: SessionState::Config,
        tunable: true,
        setter: |config: &mut Config, value: i64| {
            config.orig_global_timeout_multiplier = value as u32
        },
        getter: |config: &Config| config.orig_global_timeout_multiplier as i64,
    },
    ConfigOption {
        id: OptionId::NumConflictsOfSearchInc,
        name: "num_conflicts_of_search_inc",
        min: 100,
        max: 115,
        max_state: SessionState::Config,
        tunable: true,
        setter: |config: &mut Config, value: i64| {
            config.num_conflicts_of_search_inc = unscaled(value)
        },
        getter: |config: &Config| scaled(config.num_conflicts_of_search_inc),
    },
    ConfigOption {
        id: OptionId::MoreRedMinimLimitBinary,
        name: "more_red_minim_limit_binary",
        min: 0,
        max: 600,
        max_state: SessionState::Config,
        tunable: true,
        setter: |config: &mut Config, value: i64| {
            config.more_red_minim_limit_binary = value as u32
        },
        getter: |config: &Config| config.more_red_minim_limit_binary as i64,
    },
    ConfigOption {
        id: OptionId::RestartInc,
        name: "restart_inc",
        min: 110,
        max: 150,
        max_state: SessionState::Config,
        tunable: true,
        setter: |config: &mut Config, value: i64| config.restart_inc = unscaled(value),
        getter: |config: &Config| scaled(config.restart_inc),
    },
    ConfigOption {
        id: OptionId::RestartFirst,
        name: "restart_first",
        min: 100,
        max: 500,
        max_state: SessionState::Config,
        tunable: true,
        setter: |config: &mut Config, value: i64| config.restart_first = value as u32,
        getter: |config: &Config| config.restart_first as i64,
    },
];

/// The registry, in registry order.
pub fn options() -> &'static [ConfigOption] {
    &OPTIONS
}

/// The option with the given name, if one exists.
pub fn lookup(name: &str) -> Option<&'static ConfigOption> {
    OPTIONS.iter().find(|option| option.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_match_positions() {
        for (position, option) in OPTIONS.iter().enumerate() {
            assert_eq!(option.id as usize, position);
            assert_eq!(option.id.entry().name, option.name);
        }
    }

    #[test]
    fn names_are_unique() {
        for option in options() {
            assert_eq!(lookup(option.name), Some(option));
        }
    }

    #[test]
    fn defaults_are_permitted() {
        let config = Config::default();
        for option in options() {
            assert!(
                option.permits(option.get(&config)),
                "{} default outside of range",
                option.name
            );
        }
    }

    #[test]
    fn set_then_get() {
        let mut config = Config::default();
        for option in options() {
            for value in [option.min, option.max] {
                assert!(option.set(&mut config, value).is_ok());
                assert_eq!(option.get(&config), value, "{}", option.name);
            }
        }
    }

    #[test]
    fn out_of_range() {
        let mut config = Config::default();
        for option in options() {
            assert_eq!(
                option.set(&mut config, option.max + 1),
                Err(OptionError::InvalidValue)
            );
            assert_eq!(
                option.set(&mut config, option.min - 1),
                Err(OptionError::InvalidValue)
            );
        }
        assert_eq!(config, Config::default());
    }
}
