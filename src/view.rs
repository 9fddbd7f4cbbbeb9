use crate::grid::Grid;

/// Render the grid as a numbered table
///
/// ```text
///   H | [0]:name [1]:age
///   0 | [0]:Alice [1]:30
/// ```
pub fn render_grid(grid: &Grid) -> String {
    if grid.is_empty() {
        return ": CSV is empty :\n".to_string();
    }

    let digits_count = grid.get_row_count().to_string().len();
    let mut out = format!(
        "{: >digits_count$} | {}\n",
        "H",
        grid.get_headers()
            .iter()
            .enumerate()
            .map(|(i, col)| format!("[{}]:{}", i, col))
            .collect::<Vec<String>>()
            .join(" ")
    );

    for (index, row) in grid.get_rows().iter().enumerate() {
        let row_string = row
            .to_vector(grid.get_headers())
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("[{}]:{}", i, cell))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!("{: >digits_count$} | {}\n", index, row_string));
    }
    out
}

/// Render the "add new row" form
///
/// Unset columns are shown with a placeholder so they can be told apart from
/// explicit empty values.
pub fn render_draft(grid: &Grid) -> String {
    if grid.is_empty() {
        return ": CSV is empty :\n".to_string();
    }
    grid.get_headers()
        .iter()
        .map(|header| match grid.get_draft().get_value(header) {
            Some(value) => format!("{} = \"{}\"\n", header, value),
            None => format!("{} = <unset>\n", header),
        })
        .collect()
}
