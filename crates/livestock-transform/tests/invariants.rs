//! Property tests over the metric and region stages.

use livestock_model::{
    ElementCode, GwpSet, ItemKind, Metric, MetricRecord, NormalizedRecord, PrepareOptions,
    RawRecord, RawTable, YearColumn,
};
use livestock_standards::load_default_standards;
use livestock_transform::{CattleSplit, MetricCalculator, RegionAggregator, prepare};
use proptest::prelude::*;

fn arb_value() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        1 => Just(None),
        4 => (0.0f64..1.0e6).prop_map(Some),
    ]
}

fn arb_gas() -> impl Strategy<Value = ElementCode> {
    prop_oneof![Just(ElementCode::Ch4), Just(ElementCode::N2o)]
}

fn arb_gwp() -> impl Strategy<Value = GwpSet> {
    prop::sample::select(GwpSet::ALL.to_vec())
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}

fn gas_row(item: &str, element: ElementCode, year: i32, value: Option<f64>) -> NormalizedRecord {
    NormalizedRecord {
        area: "France".into(),
        item: item.into(),
        element: element.as_str().into(),
        element_norm: element,
        item_kind: ItemKind::Atomic,
        year,
        value,
    }
}

proptest! {
    #[test]
    fn split_conserves_stock(value in 0.0f64..1.0e7, fraction in 0.0f64..=1.0) {
        let stock = MetricRecord {
            area: "France".into(),
            item: "Cattle".into(),
            year: 2020,
            metric: Metric::Stocks,
            value: Some(value),
            item_kind: ItemKind::Aggregate,
        };
        let halves = CattleSplit::new(fraction).apply(&[stock]);
        prop_assert_eq!(halves.len(), 2);
        let sum: f64 = halves.iter().filter_map(|record| record.value).sum();
        prop_assert!(close(sum, value), "{} != {}", sum, value);
    }

    #[test]
    fn total_is_sum_of_gases(
        rows in prop::collection::vec(
            (prop::sample::select(vec!["Cattle", "Sheep", "Swine"]), arb_gas(), 2018i32..2021, arb_value()),
            1..40,
        ),
        gwp in arb_gwp(),
    ) {
        let long: Vec<NormalizedRecord> = rows
            .into_iter()
            .map(|(item, gas, year, value)| gas_row(item, gas, year, value))
            .collect();
        let out = MetricCalculator::new(gwp, None).compute(&long);

        let lookup = |item: &str, year: i32, metric: Metric| {
            out.iter()
                .find(|r| r.item == item && r.year == year && r.metric == metric)
                .and_then(|r| r.value)
        };
        for total in out.iter().filter(|r| r.metric == Metric::TotalCo2e) {
            let ch4 = lookup(&total.item, total.year, Metric::Ch4Co2e).unwrap_or(0.0);
            let n2o = lookup(&total.item, total.year, Metric::N2oCo2e).unwrap_or(0.0);
            let value = total.value.unwrap_or(f64::NAN);
            prop_assert!(close(value, ch4 + n2o), "{} != {} + {}", value, ch4, n2o);
        }
    }

    #[test]
    fn region_total_is_sum_of_members(
        france in arb_value(),
        germany in arb_value(),
        brazil in arb_value(),
    ) {
        let standards = load_default_standards().unwrap();
        let row = |area: &str, value| MetricRecord {
            area: area.into(),
            item: "Sheep".into(),
            year: 2020,
            metric: Metric::Stocks,
            value,
            item_kind: ItemKind::Atomic,
        };
        let records = vec![row("France", france), row("Germany", germany), row("Brazil", brazil)];
        let aggregation = RegionAggregator::new(&standards.regions).aggregate(&records);

        let expected = france.unwrap_or(0.0) + germany.unwrap_or(0.0);
        prop_assert_eq!(aggregation.records.len(), standards.regions.len());
        for record in &aggregation.records {
            let value = record.value.unwrap_or(f64::NAN);
            prop_assert!(close(value, expected), "{}: {} != {}", record.area, value, expected);
        }
    }

    #[test]
    fn output_is_sorted(
        rows in prop::collection::vec(
            (
                prop::sample::select(vec!["France", "Spain", "Brazil"]),
                prop::sample::select(vec!["Cattle", "Sheep", "Horses"]),
                prop::sample::select(vec!["Stocks", "Livestock total (CH4)", "Livestock total (N2O)"]),
                arb_value(),
                arb_value(),
            ),
            1..20,
        ),
    ) {
        let records = rows
            .into_iter()
            .map(|(area, item, element, y2019, y2020)| {
                RawRecord::new(area, item, element, vec![y2019, y2020])
            })
            .collect();
        let raw = RawTable::new(
            vec![YearColumn::new("Y2020", 2020), YearColumn::new("Y2019", 2019)],
            records,
        )
        .unwrap();
        let standards = load_default_standards().unwrap();
        let output = prepare(&raw, &standards, &PrepareOptions::default()).unwrap();

        prop_assert!(
            output
                .records
                .windows(2)
                .all(|pair| pair[0].output_order(&pair[1]).is_le())
        );
    }
}
