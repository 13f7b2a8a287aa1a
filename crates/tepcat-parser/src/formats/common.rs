use crate::errors::ParserError;
use crate::model::{
    ErrorMargins, Measurement, PlanetaryProperties, Quantity, Record, References,
    StellarProperties,
};
use crate::references::{human_url, reference_url};

use super::schema::{
    MeasuredField, DISCOVERY_REF, FIELD_SCHEMA, PERIOD, RECENT_REF, SYSTEM,
};

/// Comment and blank lines never produce a record.
pub(crate) fn is_skippable(line: &str) -> bool {
    line.starts_with('#') || line.trim().is_empty()
}

/// Split a data row on whitespace, enforcing the schema width.
pub(crate) fn split_row<'a>(
    parser: &'static str,
    line: &'a str,
    line_index: usize,
) -> Result<Vec<&'a str>, ParserError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != FIELD_SCHEMA.len() {
        return Err(ParserError::FieldCount {
            parser,
            line_index,
            expected: FIELD_SCHEMA.len(),
            found: fields.len(),
        });
    }
    Ok(fields)
}

pub(crate) fn parse_required_f64(
    parser: &'static str,
    fields: &[&str],
    index: usize,
    line_index: usize,
) -> Result<f64, ParserError> {
    let raw = fields[index];
    let value = raw.parse::<f64>().map_err(|err| ParserError::DataRow {
        parser,
        line_index,
        message: format!(
            "failed to parse column '{}' value '{raw}' as float: {err}",
            FIELD_SCHEMA[index]
        ),
    })?;
    // JSON has no NaN or infinity.
    if !value.is_finite() {
        return Err(ParserError::DataRow {
            parser,
            line_index,
            message: format!(
                "column '{}' value '{raw}' is not a finite number",
                FIELD_SCHEMA[index]
            ),
        });
    }
    Ok(value)
}

fn read_quantity(
    parser: &'static str,
    fields: &[&str],
    field: MeasuredField,
    margins: ErrorMargins,
    line_index: usize,
) -> Result<Quantity, ParserError> {
    let columns = field.columns();
    let value = parse_required_f64(parser, fields, columns.value, line_index)?;
    match margins {
        ErrorMargins::Skip => Ok(Quantity::Value(value)),
        ErrorMargins::Keep => {
            let error_plus = parse_required_f64(parser, fields, columns.error_plus, line_index)?;
            let error_minus = parse_required_f64(parser, fields, columns.error_minus, line_index)?;
            Ok(Quantity::WithErrors(Measurement::new(
                value,
                error_plus,
                error_minus,
            )))
        }
    }
}

/// Build a record from a row that already passed [`split_row`].
pub(crate) fn build_record(
    parser: &'static str,
    fields: &[&str],
    margins: ErrorMargins,
    line_index: usize,
) -> Result<Record, ParserError> {
    let quantity = |field| read_quantity(parser, fields, field, margins, line_index);

    let system = fields[SYSTEM].to_string();
    let period = parse_required_f64(parser, fields, PERIOD, line_index)?;
    let eccentricity = quantity(MeasuredField::Eccentricity)?;
    let semimajor_au = quantity(MeasuredField::SemimajorAxis)?;

    let stellar_properties = StellarProperties {
        temp_k: quantity(MeasuredField::StellarTemperature)?,
        metal_log: quantity(MeasuredField::Metallicity)?,
        mass_sol: quantity(MeasuredField::StellarMass)?,
        radius_sol: quantity(MeasuredField::StellarRadius)?,
        gravity_log_cgs: quantity(MeasuredField::StellarGravity)?,
        density_sol: quantity(MeasuredField::StellarDensity)?,
    };

    let planetary_properties = PlanetaryProperties {
        mass_jup: quantity(MeasuredField::PlanetMass)?,
        radius_jup: quantity(MeasuredField::PlanetRadius)?,
        gravity: quantity(MeasuredField::PlanetGravity)?,
        density_jup: quantity(MeasuredField::PlanetDensity)?,
        temp_eq_k: quantity(MeasuredField::EquilibriumTemperature)?,
    };

    let references = References {
        human_url: human_url(&system),
        discovery: reference_url(fields[DISCOVERY_REF]),
        recent: reference_url(fields[RECENT_REF]),
    };

    Ok(Record {
        system,
        period,
        eccentricity,
        semimajor_au,
        stellar_properties,
        planetary_properties,
        references,
    })
}

/// Parse whitespace-delimited rows. `first_line_index` is the 1-based source
/// line number of `lines[0]`.
pub(crate) fn parse_whitespace_rows<I, S>(
    parser: &'static str,
    lines: I,
    margins: ErrorMargins,
    first_line_index: usize,
) -> Result<Vec<Record>, ParserError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();
    for (offset, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if is_skippable(line) {
            continue;
        }
        let line_index = first_line_index + offset;
        let fields = split_row(parser, line, line_index)?;
        records.push(build_record(parser, &fields, margins, line_index)?);
    }
    Ok(records)
}
