/// Column names of a catalogue row, in positional order.
pub const FIELD_SCHEMA: [&str; 43] = [
    "system",
    "Teff",
    "Teff_erru",
    "Teff_errd",
    "FeH",
    "FeH_erru",
    "FeH_errd",
    "Msun",
    "Msun_erru",
    "Msun_errd",
    "Rsun",
    "Rsun_erru",
    "Rsun_errd",
    "cgs",
    "cgs_erru",
    "cgs_errd",
    "rhosun",
    "rhosun_erru",
    "rhosun_errd",
    "Porb",
    "ecc",
    "ecc_erru",
    "ecc_errd",
    "a_AU",
    "a_AU_erru",
    "a_AU_errd",
    "Mjup",
    "Mjup_erru",
    "Mjup_errd",
    "Rjup",
    "Rjup_erru",
    "Rjup_errd",
    "ms2",
    "ms2_erru",
    "ms2_errd",
    "rhoJup",
    "rhoJup_erru",
    "rhoJup_errd",
    "Teqk",
    "Teqk_erru",
    "Teqk_errd",
    "d_ref",
    "r_ref",
];

pub const SYSTEM: usize = 0;
pub const PERIOD: usize = 19;
pub const DISCOVERY_REF: usize = 41;
pub const RECENT_REF: usize = 42;

/// Positions of a measured value and its upper/lower uncertainty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnTriple {
    pub value: usize,
    pub error_plus: usize,
    pub error_minus: usize,
}

impl ColumnTriple {
    const fn starting_at(value: usize) -> Self {
        Self {
            value,
            error_plus: value + 1,
            error_minus: value + 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasuredField {
    StellarTemperature,
    Metallicity,
    StellarMass,
    StellarRadius,
    StellarGravity,
    StellarDensity,
    Eccentricity,
    SemimajorAxis,
    PlanetMass,
    PlanetRadius,
    PlanetGravity,
    PlanetDensity,
    EquilibriumTemperature,
}

impl MeasuredField {
    pub fn columns(&self) -> ColumnTriple {
        use MeasuredField::*;
        match self {
            StellarTemperature => ColumnTriple::starting_at(1),
            Metallicity => ColumnTriple::starting_at(4),
            StellarMass => ColumnTriple::starting_at(7),
            StellarRadius => ColumnTriple::starting_at(10),
            StellarGravity => ColumnTriple::starting_at(13),
            StellarDensity => ColumnTriple::starting_at(16),
            Eccentricity => ColumnTriple::starting_at(20),
            SemimajorAxis => ColumnTriple::starting_at(23),
            PlanetMass => ColumnTriple::starting_at(26),
            PlanetRadius => ColumnTriple::starting_at(29),
            PlanetGravity => ColumnTriple::starting_at(32),
            PlanetDensity => ColumnTriple::starting_at(35),
            EquilibriumTemperature => ColumnTriple::starting_at(38),
        }
    }
}
