use super::*;

/// Machine-readable summary on a single JSON document.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json {
    pretty: bool,
}

impl Json {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Reporter for Json {
    fn render(&self, summary: &Summary<'_>) -> anyhow::Result<String> {
        let document = serde_json::json!({
            "problem": summary.problem(),
            "exact": summary.exact(),
            "learned": summary.learned(),
            "gap": summary.gap(),
            "stats": summary.stats(),
            "visited": summary.trajectory().len(),
        });
        Ok(match self.pretty {
            true => serde_json::to_string_pretty(&document)?,
            false => serde_json::to_string(&document)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::*;

    #[test]
    fn document_carries_both_solutions() {
        let problem = Problem::sample();
        let engine = Engine::<ConstantEpsilon>::new(
            problem.clone(),
            Hyperparameters {
                episodes: 5,
                steps: 50,
                ..Hyperparameters::default()
            },
        )
        .unwrap()
        .solve();
        let exact = Simplex::default().solve(&problem).unwrap();
        let text = Json::default().render(&Summary::of(&engine, exact)).unwrap();
        let value = serde_json::from_str::<serde_json::Value>(&text).unwrap();
        assert!((value["exact"]["value"].as_f64().unwrap() - 636.0 / 13.0).abs() < 1e-9);
        assert_eq!(value["visited"].as_u64().unwrap() as usize, engine.trajectory().len());
        assert_eq!(value["stats"]["steps"].as_u64(), Some(250));
        assert!(value["problem"]["objective"].is_array());
        assert!(value.get("learned").is_some());
    }
}
