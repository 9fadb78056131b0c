//! Utils

use clap::Parser;

/// Arguments for the cart demo
#[derive(Debug, Parser)]
pub struct ExampleCartArgs {
    /// Number of scripted actions to replay, all of them when omitted
    #[clap(short, long)]
    pub n: Option<usize>,

    /// Fixture set to use for the catalog & session
    #[clap(short, long, default_value = "gallery")]
    pub fixture: String,

    /// Also print the order request that checkout would send
    #[clap(long)]
    pub order: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_gallery_fixture() -> Result<(), clap::Error> {
        let args = ExampleCartArgs::try_parse_from(["cart"])?;

        assert_eq!(args.fixture, "gallery");
        assert_eq!(args.n, None);
        assert!(!args.order);

        Ok(())
    }

    #[test]
    fn parses_short_flags() -> Result<(), clap::Error> {
        let args = ExampleCartArgs::try_parse_from(["cart", "-f", "studio", "-n", "3", "--order"])?;

        assert_eq!(args.fixture, "studio");
        assert_eq!(args.n, Some(3));
        assert!(args.order);

        Ok(())
    }
}
