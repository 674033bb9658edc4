use hive_core::filter::option_label;
use hive_site::view::Listing;

/// Caption line listing the filter options, selected one in brackets.
pub fn options_caption<T>(title: &str, listing: &Listing<T>) -> String {
    let options = listing
        .options
        .iter()
        .map(|option| {
            let label = option_label(option);
            if *option == listing.selected {
                format!("[{label}]")
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    format!("{title}: {options}")
}

#[cfg(test)]
mod tests {
    use hive_site::view::Listing;
    use pretty_assertions::assert_eq;

    use super::options_caption;

    #[test]
    fn selected_option_is_bracketed() {
        let listing: Listing<()> = Listing {
            options: vec!["all".into(), "web".into(), "ai".into()],
            selected: "web".into(),
            items: vec![],
        };
        assert_eq!(options_caption("Category", &listing), "Category: All  [Web]  Ai");
    }
}
