use crate::models::Store;

/// Fixed column order of the admin CSV export.
pub const CSV_HEADER: &str = "name,category,address,comune,lat,lon,website,telefono,description";

pub const EXPORT_FILENAME: &str = "tarocard_negozi.csv";

pub const EXPORT_MIME: &str = "text/csv;charset=utf-8";

/// RFC-4180-style quoting, applied unconditionally: every field is
/// double-quoted and embedded quotes are doubled.
fn csv_escape(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Serializes the store list with [`CSV_HEADER`] as the first row.
pub fn stores_to_csv(stores: &[Store]) -> String {
    let mut lines = vec![CSV_HEADER.to_string()];
    for s in stores {
        let lat = s.position.lat.to_string();
        let lon = s.position.lon.to_string();
        let row = [
            s.name.as_str(),
            s.category.as_str(),
            s.address.as_str(),
            s.comune.as_str(),
            lat.as_str(),
            lon.as_str(),
            s.website.as_str(),
            s.telefono.as_str(),
            s.description.as_str(),
        ]
        .map(csv_escape)
        .join(",");
        lines.push(row);
    }
    lines.join("\n")
}
