/// Benchmarks page with the twelve tables in registry order. Retail has
/// Google and Facebook CPC and clicks, Legal only Facebook CPC.
pub fn benchmarks_page() -> String {
    let mut tables: Vec<Vec<(&str, &str)>> = vec![Vec::new(); 12];
    tables[0] = vec![("Retail", "1.2M"), ("Legal", "350K")];
    tables[3] = vec![("Retail", "100"), ("Legal", "1,204")];
    tables[4] = vec![("Retail", "50")];
    tables[6] = vec![("Retail", "3.4%")];
    tables[9] = vec![("Retail", "$2.50"), ("Real Estate", "$1.55")];
    tables[10] = vec![("Retail", "$1.00"), ("Legal", "$3.00")];

    let mut html = String::from("<html><body><h1>PPC Industry Benchmarks</h1>");
    for (index, rows) in tables.iter().enumerate() {
        html.push_str(&format!(
            "<table><tbody><tr><td>Industry</td><td>Metric {}</td></tr>",
            index
        ));
        for (label, value) in rows {
            html.push_str(&format!("<tr><td>{}</td><td>{}</td></tr>", label, value));
        }
        html.push_str("</tbody></table>");
    }
    html.push_str("</body></html>");
    html
}
