// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Rendering of command results as a table or JSON.

use comfy_table::Table;
use serde_json::{Map, Value};
use simgeom_math::Vec3;

use crate::output::{OutputFormat, OutputOptions};

/// One named value in a command result.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// Scalar.
    Number(f64),
    /// Whole-number count.
    Count(usize),
    /// Yes/no answer.
    Flag(bool),
    /// Free text.
    Text(String),
    /// Single vector.
    Point(Vec3),
    /// Ordered vertex list.
    Points(Vec<Vec3>),
}

/// Ordered list of named fields produced by one command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    fields: Vec<(&'static str, Field)>,
}

impl Report {
    /// Empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field.
    pub fn with(mut self, name: &'static str, field: Field) -> Self {
        self.fields.push((name, field));
        self
    }

    /// Renders per `options`.
    pub fn render(&self, options: &OutputOptions) -> Result<String, serde_json::Error> {
        match options.format {
            OutputFormat::Table => Ok(self.to_table(usize::from(options.precision))),
            OutputFormat::Json => serde_json::to_string_pretty(&self.to_json()),
        }
    }

    fn to_table(&self, precision: usize) -> String {
        let mut table = Table::new();
        table.set_header(vec!["field", "value"]);
        for (name, field) in &self.fields {
            table.add_row(vec![(*name).to_owned(), format_field(field, precision)]);
        }
        table.to_string()
    }

    fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .fields
            .iter()
            .map(|(name, field)| ((*name).to_owned(), field_json(field)))
            .collect();
        Value::Object(map)
    }
}

fn format_point(p: &Vec3, precision: usize) -> String {
    format!(
        "({:.precision$}, {:.precision$}, {:.precision$})",
        p.x(),
        p.y(),
        p.z()
    )
}

fn format_field(field: &Field, precision: usize) -> String {
    match field {
        Field::Number(n) => format!("{n:.precision$}"),
        Field::Count(n) => n.to_string(),
        Field::Flag(b) => b.to_string(),
        Field::Text(s) => s.clone(),
        Field::Point(p) => format_point(p, precision),
        Field::Points(ps) => ps
            .iter()
            .map(|p| format_point(p, precision))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn field_json(field: &Field) -> Value {
    match field {
        // Non-finite numbers have no JSON form and become `null`.
        Field::Number(n) => Value::from(*n),
        Field::Count(n) => Value::from(*n),
        Field::Flag(b) => Value::Bool(*b),
        Field::Text(s) => Value::String(s.clone()),
        Field::Point(p) => point_json(p),
        Field::Points(ps) => Value::Array(ps.iter().map(point_json).collect()),
    }
}

fn point_json(p: &Vec3) -> Value {
    Value::Array(p.to_array().into_iter().map(Value::from).collect())
}
