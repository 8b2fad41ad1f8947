use serde::Serialize;

/// Absolute errors of MinHash estimates against exact Jaccard similarity.
pub struct Metrics {
    num_hashes: usize,
    errors: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct MetricResult {
    pub num_hashes: usize,
    pub samples: usize,
    pub mean_abs_error: f64,
    pub max_abs_error: f64,
    pub rmse: f64,
}

fn mean(list: &[f64]) -> f64 {
    if list.is_empty() {
        return 0.0;
    }
    let sum: f64 = Iterator::sum(list.iter());
    sum / (list.len() as f64)
}

impl Metrics {

    pub fn new(num_hashes: usize) -> Self {
        Metrics { num_hashes, errors: Vec::new() }
    }

    pub fn update_metrics(&mut self, estimated: f64, exact: f64) {
        self.errors.push((estimated - exact).abs());
    }

    pub fn get_result(&self) -> MetricResult {
        let squared: Vec<f64> = self.errors.iter().map(|e| e * e).collect();
        MetricResult {
            num_hashes: self.num_hashes,
            samples: self.errors.len(),
            mean_abs_error: mean(&self.errors),
            max_abs_error: self.errors.iter().cloned().fold(0.0, f64::max),
            rmse: mean(&squared).sqrt(),
        }
    }

}

#[cfg(test)]
mod tests {
    use super::Metrics;

    #[test]
    fn test_metrics() {
        let mut metrics = Metrics::new(10);
        metrics.update_metrics(0.5, 0.4);
        metrics.update_metrics(0.3, 0.4);
        metrics.update_metrics(0.4, 0.4);
        let result = metrics.get_result();
        assert_eq!(result.samples, 3);
        assert!((result.mean_abs_error - 0.2 / 3.0).abs() < 1e-9);
        assert!((result.max_abs_error - 0.1).abs() < 1e-9);
        assert!((result.rmse - (0.02f64 / 3.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_empty_metrics() {
        let result = Metrics::new(5).get_result();
        assert_eq!(result.samples, 0);
        assert_eq!(result.mean_abs_error, 0.0);
    }

    #[test]
    fn test_result_as_json() {
        let mut metrics = Metrics::new(50);
        metrics.update_metrics(0.5, 0.25);
        let json = serde_json::to_value(metrics.get_result()).unwrap();
        assert_eq!(json["num_hashes"], 50);
        assert_eq!(json["samples"], 1);
        assert_eq!(json["max_abs_error"], 0.25);
    }
}
