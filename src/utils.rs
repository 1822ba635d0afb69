use crate::report::ReportTable;

/// Min, max and mean of the finite values of a series, `None` when there are none.
pub fn series_statistics(values: &[f64]) -> Option<(f64, f64, f64)> {
    let valid_values: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();

    if valid_values.is_empty() {
        return None;
    }

    let min = valid_values.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let max = valid_values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let mean = valid_values.iter().sum::<f64>() / valid_values.len() as f64;

    Some((min, max, mean))
}

pub fn print_series_statistics(name: &str, unit: &str, values: &[f64]) {
    match series_statistics(values) {
        Some((min, max, mean)) => {
            println!("{}:", name);
            println!("  Min: {:.3} {}", min, unit);
            println!("  Max: {:.3} {}", max, unit);
            println!("  Mean: {:.3} {}", mean, unit);
        }
        None => println!("{}: no valid values", name),
    }
}

pub fn print_report_statistics(table: &ReportTable) {
    println!("Steps: {}", table.len());

    print_series_statistics("Modeled DO", "mg O2 L-1", &table.modeled());
    let observed: Vec<f64> = table.observed().into_iter().flatten().collect();
    print_series_statistics("Observed DO", "mg O2 L-1", &observed);

    let phyto: Vec<f64> = table.rows.iter().map(|r| r.phyto).collect();
    print_series_statistics("Phytoplankton", "mg C L-1", &phyto);

    let npp: Vec<f64> = table.rows.iter().filter_map(|r| r.npp).collect();
    print_series_statistics("NPP per step", "mg C L-1", &npp);

    match table.fit_summary() {
        Some(fit) => println!("Fit: {}", fit),
        None => println!("Fit: no DO observations on the time grid"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_statistics() {
        let (min, max, mean) = series_statistics(&[2.0, f64::NAN, 4.0, 9.0]).unwrap();

        assert_eq!(min, 2.0);
        assert_eq!(max, 9.0);
        assert!((mean - 5.0).abs() < 1e-12);
        assert_eq!(series_statistics(&[f64::NAN]), None);
        assert_eq!(series_statistics(&[]), None);
    }
}
