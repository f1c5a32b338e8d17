use crate::calculators::Calculator;
use crate::client::{CalculatorClient, SubmitError};
use crate::form::FormState;
use crate::models::{ChartKind, PageView, ResultValues};
use crate::normalize::build_payload;
use crate::render::render_charts;
use serde_json::{Map, Value};

/// State owned by one calculator page.
#[derive(Debug, Clone)]
pub struct CalculatorPage {
    calculator: &'static Calculator,
    form: FormState,
    result: Option<ResultValues>,
    error: Option<String>,
    loading: bool,
    chart: ChartKind,
}

impl CalculatorPage {
    pub fn new(calculator: &'static Calculator) -> Self {
        Self {
            calculator,
            form: FormState::for_calculator(calculator),
            result: None,
            error: None,
            loading: false,
            chart: ChartKind::default(),
        }
    }

    pub fn calculator(&self) -> &'static Calculator {
        self.calculator
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn result(&self) -> Option<&ResultValues> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn chart(&self) -> ChartKind {
        self.chart
    }

    pub fn update_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        self.form.set(name, value)
    }

    /// Switching chart kind only changes how the retained result is drawn.
    pub fn set_chart(&mut self, kind: ChartKind) {
        self.chart = kind;
    }

    /// Blocks on empty required fields; otherwise clears the previous error,
    /// raises the loading flag and hands back the upstream payload.
    pub fn begin_submit(&mut self) -> Result<Map<String, Value>, SubmitError> {
        let missing = self.form.missing_required(self.calculator);
        if !missing.is_empty() {
            let err = SubmitError::MissingFields(missing);
            self.error = Some(err.to_string());
            return Err(err);
        }

        self.error = None;
        self.loading = true;
        Ok(build_payload(self.calculator, &self.form))
    }

    /// A failure keeps the previously displayed result and only sets the error.
    pub fn finish_submit(
        &mut self,
        outcome: Result<Map<String, Value>, SubmitError>,
    ) -> Result<(), SubmitError> {
        self.loading = false;
        match outcome {
            Ok(body) => {
                self.result = Some(ResultValues::from_json(self.calculator.result_fields, &body));
                self.error = None;
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub async fn submit(&mut self, client: &CalculatorClient) -> Result<(), SubmitError> {
        let payload = self.begin_submit()?;
        let outcome = client.submit(self.calculator, &payload).await;
        self.finish_submit(outcome)
    }

    pub fn view(&self) -> PageView {
        let values = self.result.clone().unwrap_or_default();
        PageView {
            calculator: self.calculator.slug,
            title: self.calculator.title,
            lines: (self.calculator.summarize)(&values),
            error: self.error.clone(),
            loading: self.loading,
            chart: self.chart,
            charts: self
                .result
                .as_ref()
                .map(|result| render_charts(&(self.calculator.chart)(result))),
        }
    }
}
