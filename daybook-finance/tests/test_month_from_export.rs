use daybook_core::Chart;
use daybook_finance::{month, MonthSummary};
use daybook_ingest::{parse_orders_csv, write_journal, OrderRecord};

const HEADER: &str = "Name, Created at ,Billing Country, Subtotal , Shipping ,Discount Amount, Taxes , Total ,Payment Method\n";

fn export(rows: &[&str]) -> Vec<OrderRecord> {
    let mut text = HEADER.to_string();
    for r in rows {
        text.push_str(r);
        text.push('\n');
    }
    parse_orders_csv(text.as_bytes()).unwrap()
}

fn render(orders: &[OrderRecord], m: u32, y: i32) -> String {
    let journal = month::run(orders, m, y, &Chart::default()).unwrap();
    let mut buf = Vec::new();
    write_journal(&mut buf, &journal.lines).unwrap();
    String::from_utf8(buf).unwrap()
}

/// Single domestic Stripe order: shows the advisory balance flag firing.
#[test]
fn test_single_order_end_to_end() {
    let orders = export(&["#1001,01/03/2025,AE,100.00,10.00,5.00,5.00,110.00,Stripe"]);
    let journal = month::run(&orders, 3, 2025, &Chart::default()).unwrap();

    let got: Vec<_> = journal
        .lines
        .iter()
        .map(|l| (l.account_code.as_str(), l.tax_rate.as_str(), l.amount_text()))
        .collect();
    assert_eq!(
        got,
        vec![
            ("208 - Revenue - Shopify", "Output VAT 5% (5%)", "-105.00".to_string()),
            ("203 - Revenue - Shipping Retail", "Zero Rated Output VAT (0%)", "-10.00".to_string()),
            ("102 - Stripe Account", "Tax Exempt (0%)", "110.00".to_string()),
            ("205B - Sales Discount [Shopify]", "Output VAT 5% (5%)", "5.00".to_string()),
        ]
    );

    assert_eq!(journal.days.len(), 1);
    let day = &journal.days[0];
    assert_eq!(day.tax, 5.0);
    assert!(day.line_sum.abs() < 1e-9);
    assert!(!day.balanced, "sum 0.00 vs tax 5.00 should be flagged");

    let text = render(&orders, 3, 2025);
    assert_eq!(
        text.lines().nth(1),
        Some("Shopify Sales 01.03.2025,01/03/2025,Shopify Sales 01.03.2025,208 - Revenue - Shopify,Output VAT 5% (5%),-105.00")
    );
}

/// Mixed day: domestic and export orders, two channels, all five categories.
#[test]
fn test_mixed_day_balances_to_tax() {
    let orders = export(&[
        "#2001,04/03/2025,AE,\"1,000.00\",20.00,50.00,47.50,\"1,067.50\",Tabby",
        "#2002,04/03/2025,SA,300.00,30.00,0,0,330.00,Stripe",
        "#2003,04/03/2025,AE,200.00,0,0,10.00,210.00,Tabby",
    ]);
    let journal = month::run(&orders, 3, 2025, &Chart::default()).unwrap();
    assert_eq!(journal.lines.len(), 6);

    let day = &journal.days[0];
    assert_eq!(day.order_count, 3);
    assert_eq!(day.international_count, 1);
    assert!(day.balanced, "{day:?}");
    assert!((day.line_sum - 57.50).abs() < 0.01);

    let accounts: Vec<_> = journal.lines.iter().map(|l| l.account_code.as_str()).collect();
    assert_eq!(
        accounts,
        vec![
            "208 - Revenue - Shopify",
            "203 - Revenue - Shipping Retail",
            "112 - Tabby",
            "102 - Stripe Account",
            "205B - Sales Discount [Shopify]",
            "208 - Revenue - Shopify",
        ]
    );
}

#[test]
fn test_output_is_chronological_regardless_of_input_order() {
    let orders = export(&[
        "#1,15/03/2025,AE,100,0,0,5,105,Stripe",
        "#2,02/03/2025,AE,100,0,0,5,105,Tabby",
        "#3,10/03/2025,AE,100,0,0,5,105,Cash",
        "#4,02/03/2025,AE,100,0,0,5,105,Stripe",
    ]);
    let journal = month::run(&orders, 3, 2025, &Chart::default()).unwrap();

    let dates: Vec<_> = journal
        .lines
        .iter()
        .map(|l| daybook_core::parse_order_date(&l.date).unwrap())
        .collect();
    assert!(dates.windows(2).all(|w| w[0] <= w[1]), "dates out of order: {dates:?}");
    assert_eq!(journal.days.len(), 3);
}

#[test]
fn test_idempotent_output() {
    let orders = export(&[
        "#1,03/03/2025,AE,100,10,5,5,110,Stripe",
        "#2,01/03/2025,KW,80,0,0,0,80,Tamara Split Payments",
        "#3,03/03/2025,AE,49.99,0,0,2.50,52.49,Custom (POS)",
    ]);
    let first = render(&orders, 3, 2025);
    let second = render(&orders, 3, 2025);
    assert_eq!(first, second);
}

#[test]
fn test_month_filter_excludes_neighbouring_months() {
    let orders = export(&[
        "#1,31/01/2025,AE,100,0,0,5,105,Stripe",
        "#2,01/02/2025,AE,100,0,0,5,105,Stripe",
        "#3,01/02/2024,AE,100,0,0,5,105,Stripe",
        "#4,garbage,AE,100,0,0,5,105,Stripe",
    ]);
    let journal = month::run(&orders, 2, 2025, &Chart::default()).unwrap();
    assert_eq!(journal.matched_orders, 1);
    assert!(journal.lines.iter().all(|l| l.date == "01/02/2025"));
}

#[test]
fn test_month_summary_nets_to_tax() {
    let orders = export(&[
        "#1,01/03/2025,AE,100,0,0,5,105,Stripe",
        "#2,02/03/2025,AE,200,0,0,10,210,Tabby",
    ]);
    let journal = month::run(&orders, 3, 2025, &Chart::default()).unwrap();
    let summary = MonthSummary::from_month(&journal);

    assert_eq!(summary.day_count, 2);
    assert_eq!(summary.account_totals["208 - Revenue - Shopify"], -300.0);
    assert_eq!(summary.account_totals["102 - Stripe Account"], 105.0);
    assert_eq!(summary.account_totals["112 - Tabby"], 210.0);
    // each day nets to its tax, so the month nets to total tax
    assert!((summary.net_total - 15.0).abs() < 1e-9);
    assert!(!summary.balanced);
    assert!(summary.unbalanced_days.is_empty());
}
