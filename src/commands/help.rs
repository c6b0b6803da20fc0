pub fn text() -> String {
    [
        "📋 **Transactions**",
        "",
        "`$list`                       show loaded transactions grouped by month",
        "`$more`                       load the next page",
        "`$scroll <offset> [viewport]` report a scroll position; loads near the end",
        "`$show <id | #number>`        transaction details",
        "`$filter status=.. type=..`   filter by status/type (`$filter clear` to reset)",
        "`$stats`                      totals for the loaded transactions",
        "`$export`                     loaded sections as JSON",
        "`$quit`                       leave",
    ]
    .join("\n")
}
