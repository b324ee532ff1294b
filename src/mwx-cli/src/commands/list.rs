//! List command handler

use mwx::XASSETS;

/// Handle the list command
pub fn handle() {
    for line in lines() {
        println!("{}", line);
    }
}

/// One aligned `name  output` line per registered compiler
fn lines() -> Vec<String> {
    let width = XASSETS.iter().map(|x| x.name.len()).max().unwrap_or(0);

    XASSETS
        .iter()
        .map(|x| format!("{:width$}  {}", x.name, x.output, width = width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_cover_registry() {
        let lines = lines();
        assert_eq!(lines.len(), XASSETS.len());
        assert!(lines.iter().any(|l| l.starts_with("Bundles ") && l.ends_with("bundles.json")));
    }

    #[test]
    fn test_lines_aligned() {
        let starts: Vec<usize> = lines()
            .iter()
            .map(|l| l.len() - l.rsplit(' ').next().unwrap().len())
            .collect();
        assert!(starts.windows(2).all(|w| w[0] == w[1]));
    }
}
