use crate::calculators::{self, Calculator, FieldSpec};
use crate::models::ChartKind;
use crate::page::CalculatorPage;
use crate::render::escape;

pub fn render_home() -> String {
    let links: String = calculators::ALL
        .iter()
        .map(|calc| {
            format!(
                r#"<a class="tile" href="/{}">{}</a>"#,
                calc.slug,
                escape(calc.title)
            )
        })
        .collect();

    HOME_HTML
        .replace("{{STYLE}}", STYLE)
        .replace("{{LINKS}}", &links)
}

pub fn render_calculator(page: &CalculatorPage) -> String {
    let calc = page.calculator();
    let view = page.view();

    let fields: String = calc
        .fields
        .iter()
        .map(|field| render_field(field, page.form().get(field.name).unwrap_or_default()))
        .collect();

    let lines: String = view
        .lines
        .iter()
        .map(|line| {
            let share = line
                .share
                .as_ref()
                .map(|share| format!(" <em>({})</em>", escape(share)))
                .unwrap_or_default();
            format!(
                r#"<p class="line"><span>{}</span><strong>{}</strong>{share}</p>"#,
                escape(&line.label),
                escape(&line.value)
            )
        })
        .collect();

    let chart_options: String = [ChartKind::Pie, ChartKind::Bar]
        .iter()
        .map(|kind| {
            let selected = if *kind == view.chart { " selected" } else { "" };
            let label = match kind {
                ChartKind::Pie => "Pie",
                ChartKind::Bar => "Bar",
            };
            format!(r#"<option value="{kind}"{selected}>{label}</option>"#)
        })
        .collect();

    let (pie, bar) = view
        .charts
        .map(|charts| (charts.pie, charts.bar))
        .unwrap_or_default();
    let charts = format!(
        r#"<div id="chart-pie" class="chart-card"{}>{pie}</div><div id="chart-bar" class="chart-card"{}>{bar}</div>"#,
        hidden_unless(view.chart == ChartKind::Pie),
        hidden_unless(view.chart == ChartKind::Bar),
    );

    CALCULATOR_HTML
        .replace("{{STYLE}}", STYLE)
        .replace("{{TITLE}}", &escape(calc.title))
        .replace("{{SLUG}}", calc.slug)
        .replace("{{CHART_OPTIONS}}", &chart_options)
        .replace("{{LINES}}", &lines)
        .replace("{{CHARTS}}", &charts)
        .replace("{{NAV}}", &render_nav(calc))
        // User-supplied text goes in last so it is never scanned for placeholders.
        .replace("{{ERROR}}", &escape(view.error.as_deref().unwrap_or_default()))
        .replace("{{FIELDS}}", &fields)
}

fn render_field(field: &FieldSpec, value: &str) -> String {
    let required = if field.required { " required" } else { "" };
    if field.options.is_empty() {
        return format!(
            r#"<input name="{}" type="number" step="any" placeholder="{}" aria-label="{}" value="{}"{required} />"#,
            field.name,
            escape(field.label),
            escape(field.label),
            escape(value)
        );
    }

    let options: String = field
        .options
        .iter()
        .map(|(option, label)| {
            let selected = if *option == value { " selected" } else { "" };
            format!(r#"<option value="{option}"{selected}>{}</option>"#, escape(label))
        })
        .collect();
    format!(
        r#"<select name="{}" aria-label="{}"{required}>{options}</select>"#,
        field.name,
        escape(field.label)
    )
}

fn render_nav(current: &Calculator) -> String {
    let mut nav = String::from(r#"<a href="/">Back to Home</a>"#);
    for calc in calculators::ALL.iter().filter(|calc| calc.slug != current.slug) {
        nav.push_str(&format!(r#"<a href="/{}">{}</a>"#, calc.slug, escape(calc.title)));
    }
    nav
}

fn hidden_unless(visible: bool) -> &'static str {
    if visible { "" } else { " hidden" }
}

const STYLE: &str = r#"
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg: #121212;
      --card: #1e1e1e;
      --field: #2a2a2a;
      --ink: #f5f5f5;
      --muted: #a3a3a3;
      --accent: #2563eb;
      --error: #ef4444;
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.35);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    h1, h2 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      margin: 0 0 18px;
    }

    .app {
      width: min(1040px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
      gap: 36px;
    }

    form {
      display: grid;
      gap: 14px;
    }

    input, select {
      width: 100%;
      padding: 12px 14px;
      border-radius: 12px;
      border: 1px solid #4b5563;
      background: var(--field);
      color: var(--ink);
      font: inherit;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 12px;
      padding: 14px 20px;
      font: inherit;
      font-weight: 600;
      background: var(--accent);
      color: white;
      cursor: pointer;
    }

    .error {
      color: var(--error);
      min-height: 1.2em;
      margin: 0;
    }

    .results {
      display: grid;
      gap: 18px;
      align-content: start;
    }

    .line {
      display: flex;
      justify-content: space-between;
      gap: 12px;
      margin: 0;
    }

    .line em {
      color: var(--muted);
      font-style: normal;
    }

    .chart-controls {
      display: flex;
      gap: 12px;
      align-items: center;
    }

    .chart-controls select {
      width: auto;
    }

    .chart-card svg {
      width: 100%;
      height: auto;
      display: block;
    }

    .chart-label, .chart-value, .chart-title {
      fill: var(--ink);
      font-size: 11px;
    }

    nav, .tiles {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    nav a, .tile {
      padding: 10px 16px;
      border-radius: 12px;
      background: var(--field);
      color: var(--ink);
      text-decoration: none;
    }
"#;

const HOME_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Financial Calculators</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="app">
    <section>
      <h1>Financial Calculators</h1>
      <p>Choose a tool below.</p>
      <div class="tiles">{{LINKS}}</div>
    </section>
  </main>
</body>
</html>
"#;

const CALCULATOR_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="app">
    <section>
      <h2>{{TITLE}}</h2>
      <form id="calc-form" method="post" action="/{{SLUG}}">
        {{FIELDS}}
        <button id="submit-btn" type="submit">Calculate</button>
        <p id="error" class="error">{{ERROR}}</p>
        <div class="chart-controls">
          <label for="chart-kind">Chart Type:</label>
          <select id="chart-kind" name="chart">{{CHART_OPTIONS}}</select>
        </div>
      </form>
    </section>

    <section class="results">
      <div id="lines">{{LINES}}</div>
      <div id="charts">{{CHARTS}}</div>
      <nav>{{NAV}}</nav>
    </section>
  </main>

  <script>
    const form = document.getElementById('calc-form');
    const submitBtn = document.getElementById('submit-btn');
    const errorEl = document.getElementById('error');
    const linesEl = document.getElementById('lines');
    const chartKind = document.getElementById('chart-kind');
    const pieEl = document.getElementById('chart-pie');
    const barEl = document.getElementById('chart-bar');

    const showChart = (kind) => {
      pieEl.hidden = kind !== 'pie';
      barEl.hidden = kind !== 'bar';
    };

    const setLoading = (loading) => {
      submitBtn.textContent = loading ? 'Calculating...' : 'Calculate';
    };

    const renderLines = (lines) => {
      linesEl.replaceChildren(
        ...lines.map((line) => {
          const row = document.createElement('p');
          row.className = 'line';
          const label = document.createElement('span');
          label.textContent = line.label;
          const value = document.createElement('strong');
          value.textContent = line.value;
          row.append(label, value);
          if (line.share) {
            const share = document.createElement('em');
            share.textContent = ` (${line.share})`;
            row.append(share);
          }
          return row;
        })
      );
    };

    chartKind.addEventListener('change', () => showChart(chartKind.value));

    form.addEventListener('submit', async (event) => {
      event.preventDefault();
      errorEl.textContent = '';
      setLoading(true);

      const fields = {};
      new FormData(form).forEach((value, key) => {
        fields[key] = String(value);
      });

      try {
        const res = await fetch('/api/calculators/{{SLUG}}', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ fields, chart: chartKind.value })
        });
        const data = await res.json().catch(() => ({}));
        if (!res.ok) {
          throw new Error(data.error || 'Failed to calculate');
        }
        renderLines(data.lines);
        if (data.charts) {
          pieEl.innerHTML = data.charts.pie;
          barEl.innerHTML = data.charts.bar;
        }
        showChart(chartKind.value);
      } catch (err) {
        errorEl.textContent = err instanceof TypeError
          ? 'Unable to reach the calculation service'
          : err.message;
      } finally {
        setLoading(false);
      }
    });
  </script>
</body>
</html>
"#;
