//! Prometheus text exposition format (version 0.0.4).

use std::fmt::Write;

use super::snapshot::{FamilySnapshot, SeriesValue};

/// Content type served alongside [`encode`] output.
pub const TEXT_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Render families in order. Families without series still get their
/// `# HELP`/`# TYPE` header.
pub fn encode<I>(families: I) -> String
where
    I: IntoIterator<Item = FamilySnapshot>,
{
    let mut out = String::new();
    for f in families {
        write_family(&f, &mut out);
    }
    out
}

fn write_family(f: &FamilySnapshot, out: &mut String) {
    let _ = writeln!(out, "# HELP {} {}", f.name, escape_help(&f.help));
    let _ = writeln!(out, "# TYPE {} {}", f.name, f.kind.as_str());

    for s in &f.series {
        match &s.value {
            SeriesValue::Counter(v) => {
                let _ = writeln!(out, "{}{} {}", f.name, label_block(&f.label_names, &s.label_values, None), v);
            }
            SeriesValue::Histogram(h) => {
                for (le, count) in &h.buckets {
                    let le = format_float(*le);
                    let _ = writeln!(
                        out,
                        "{}_bucket{} {}",
                        f.name,
                        label_block(&f.label_names, &s.label_values, Some(&le)),
                        count
                    );
                }
                let _ = writeln!(
                    out,
                    "{}_bucket{} {}",
                    f.name,
                    label_block(&f.label_names, &s.label_values, Some("+Inf")),
                    h.count
                );

                let labels = label_block(&f.label_names, &s.label_values, None);
                let _ = writeln!(out, "{}_sum{} {}", f.name, labels, format_float(h.sum));
                let _ = writeln!(out, "{}_count{} {}", f.name, labels, h.count);
            }
        }
    }
}

/// `{k="v",...}` or the empty string when there is nothing to render.
fn label_block(names: &[String], values: &[String], le: Option<&str>) -> String {
    let mut pairs: Vec<String> = names
        .iter()
        .zip(values)
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
        .collect();
    if let Some(le) = le {
        pairs.push(format!("le=\"{le}\""));
    }
    if pairs.is_empty() {
        String::new()
    } else {
        format!("{{{}}}", pairs.join(","))
    }
}

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

fn format_float(v: f64) -> String {
    if v.is_nan() {
        "NaN".into()
    } else if v == f64::INFINITY {
        "+Inf".into()
    } else if v == f64::NEG_INFINITY {
        "-Inf".into()
    } else {
        v.to_string()
    }
}
