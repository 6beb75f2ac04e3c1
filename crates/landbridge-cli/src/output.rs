//! Output formatting module

use serde::Serialize;

use landbridge_app::WizardStep;
use landbridge_domain::model::ShipmentDraft;
use landbridge_domain::service::FeeBreakdown;
use landbridge_types::{DashboardStats, Order, OutputFormat, Result, User};

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn yen(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("¥{}", out)
}

pub fn output_quote(format: OutputFormat, breakdown: &FeeBreakdown) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(breakdown);
    }

    println!("\n料金計算");
    println!("========");
    println!("Size:            {}", breakdown.size_category.label());
    println!("Base fee:        {}", yen(breakdown.base_fee));
    if breakdown.weight_surcharge > 0 {
        println!("Weight:          +{}", yen(breakdown.weight_surcharge));
    }
    if breakdown.speed_surcharge > 0 {
        println!("Speed:           +{}", yen(breakdown.speed_surcharge));
    }
    if breakdown.insurance_fee > 0 {
        println!("Insurance:       +{}", yen(breakdown.insurance_fee));
    }
    println!("-------------------------");
    println!("Total:           {}", yen(breakdown.total));
    Ok(())
}

pub fn output_review(step: WizardStep, draft: &ShipmentDraft, fee: Option<u32>) {
    println!("\nStep {}: {}", step.number(), step.label());
    println!("========================");
    println!("Package:         {}", draft.package.package_type.item_name());
    if let Some(dims) = draft.package.dimensions() {
        println!(
            "Size:            {} x {} x {} cm",
            dims.length, dims.width, dims.height
        );
    }
    if let Some(w) = draft.package.weight_kg {
        println!("Weight:          {} kg", w);
    }
    if draft.package.fragile {
        println!("Fragile:         Yes");
    }
    println!("Delivery:        {}", draft.delivery_speed.label());
    println!(
        "Insurance:       {}",
        if draft.package.insurance { "Yes" } else { "No" }
    );
    println!("From:            {} {}", draft.sender.name, draft.sender.to_address());
    println!(
        "To:              {} {}",
        draft.recipient.name,
        draft.recipient.to_address()
    );
    match fee {
        Some(fee) => println!("Fee:             {}", yen(fee)),
        None => println!("Fee:             (計算できません)"),
    }
}

pub fn output_order(format: OutputFormat, order: &Order) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(order);
    }

    println!("\n配送依頼が完了しました");
    println!("======================");
    print_order_detail(order);
    Ok(())
}

fn print_order_detail(order: &Order) {
    println!("Tracking:        {}", order.tracking_number);
    println!("Status:          {}", order.status.label());
    println!("From:            {}", order.origin);
    println!("To:              {}", order.destination);
    for item in &order.items {
        println!(
            "Item:            {} x{} ({} kg) {}",
            item.name,
            item.quantity,
            item.weight,
            yen(item.price)
        );
    }
    println!("Total:           {}", yen(order.total_price));
    println!(
        "Created:         {}",
        order.created_at.format("%Y-%m-%d %H:%M")
    );
    println!(
        "Estimated:       {}",
        order.estimated_delivery.format("%Y-%m-%d %H:%M")
    );
    if let Some(at) = order.actual_delivery {
        println!("Delivered:       {}", at.format("%Y-%m-%d %H:%M"));
    }
}

pub fn output_orders(format: OutputFormat, orders: &[Order]) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(orders);
    }

    if orders.is_empty() {
        println!("注文はありません");
        return Ok(());
    }

    println!(
        "{:<16} {:<10} {:<10} {:<10} {:>10}",
        "TRACKING", "STATUS", "FROM", "TO", "TOTAL"
    );
    for order in orders {
        println!(
            "{:<16} {:<10} {:<10} {:<10} {:>10}",
            order.tracking_number,
            order.status.label(),
            order.origin.state,
            order.destination.state,
            yen(order.total_price)
        );
    }
    println!("\n{} orders", orders.len());
    Ok(())
}

pub fn output_tracked(format: OutputFormat, order: &Order) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(order);
    }
    println!();
    print_order_detail(order);
    Ok(())
}

pub fn output_stats(format: OutputFormat, stats: &DashboardStats) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(stats);
    }

    println!("\nDashboard");
    println!("=========");
    println!("総注文数:        {}", stats.total_orders);
    println!("配送中:          {}", stats.active_orders);
    println!("配送完了:        {}", stats.delivered_orders);
    println!(
        "ご利用金額:      ¥{}",
        stats.total_spent
    );
    match stats.average_delivery_time {
        Some(hours) => println!("平均配送時間:    {:.1}時間", hours),
        None => println!("平均配送時間:    -"),
    }
    Ok(())
}

pub fn output_user(format: OutputFormat, user: &User) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(user);
    }

    println!("Name:            {}", user.name);
    println!("Email:           {}", user.email);
    println!("Phone:           {}", user.phone);
    if let Some(ref company) = user.company {
        println!("Company:         {}", company);
    }
    if let Some(ref address) = user.address {
        println!("Address:         {}", address);
    }
    println!(
        "Last login:      {}",
        user.last_login.format("%Y-%m-%d %H:%M")
    );
    Ok(())
}
