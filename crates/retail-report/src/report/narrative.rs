//! Fixed commentary placed between the report's tables and charts.
//!
//! None of these strings are computed from the data.
use maud::{html, Markup};

pub const REPORT_TITLE: &str = "Welcome to Retailer Details!";

pub const AGE_HEADING: &str = "Range of ages that shop at This Retailer";
pub const TOP_DAYS_INTRO: &str = "These are the top ten best selling days recorded";

pub const SALES_HEADING: &str = "Let's see the recorded sales over the past year below: ";
pub const SALES_TREND_COMMENT: &str = "We can see that this retailer's sales suggest that this retailer has a continous cycle of low sales and high values with outliers skewed toward the lower end.\nHowever, I'd like to prove that next below";
pub const SALES_DISTRIBUTION_COMMENT: &str = "As we can see, the distribution of sales leans heavily toward the lower end of the total amount.\nWe can conclude that this retailer's sales rely on high quantity, low price over high price, low quantity.\n\nThis leads me to believe that it should focus on advertising its cheaper options creating more revenue.";

pub const CATEGORY_HEADING: &str = "Lets see which category has the most quantity sold below:";
pub const CATEGORY_TABLE_COMMENT: &str = "As expected, clothing dominates but surprisingly electronics isn't far behind with beauty contributing least.\nLet's visualize that though.";
pub const CATEGORY_CHART_COMMENT: &str = "Clothing leads the way with Beauty being the least.\nThis retailer's highest selling product remains its clothing";

pub const GENDER_SPEND_INTRO: &str = "Let's find out which gender spends more in each category on average.";
pub const GENDER_SPEND_TABLE_COMMENT: &str = "Men spend more on average for beauty items.Women spend far more on average on clothing while men take the lead once again in electronics.";
pub const GENDER_SPEND_CHART_COMMENT: &str = "Men and women share an equal standing in expenses with each gender showing towards particular product category as opposed to a single skewed view.";

pub const CONCLUSION_HEADING: &str = "In conclusion: ";
pub const CONCLUSION: &str = "This retailer's sales fluctuate regularly but their highest selling quantities remain in their cheap items. These cheap items are often bought in bulk allowing for a higher return on investment.\nDespite clothing being a large seller, they have electronics to support their sales targets with enough of a male and female demographic to continue successfully.";

/// Render commentary as paragraphs. A blank line starts a new paragraph and
/// single newlines become line breaks.
pub fn paragraphs(text: &str) -> Markup {
    html! {
        @for block in text.split("\n\n").map(str::trim).filter(|b| !b.is_empty()) {
            p {
                @for (idx, line) in block.lines().map(str::trim).enumerate() {
                    @if idx > 0 { br; }
                    (line)
                }
            }
        }
    }
}
