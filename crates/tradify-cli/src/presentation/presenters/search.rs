use crate::presentation::view_models::{
    CommandOutput, SearchHitViewModel, SearchNoticeViewModel, SearchResultViewModel, Tip,
};
use tradify_engine::highlight;
use tradify_runtime::PanelMessage;
use tradify_types::Product;

fn message_key(message: PanelMessage) -> &'static str {
    match message {
        PanelMessage::Prompt => "prompt",
        PanelMessage::NoResults => "no_results",
    }
}

pub fn present_search(
    query: &str,
    results: &[&Product],
    message: Option<PanelMessage>,
) -> CommandOutput<SearchResultViewModel> {
    let hits = results
        .iter()
        .map(|p| SearchHitViewModel {
            id: p.id.get(),
            name: p.name.clone(),
            segments: highlight(&p.name, query),
            affiliate_link: p.affiliate_link.clone(),
        })
        .collect();

    let content = SearchResultViewModel {
        query: query.to_string(),
        results: hits,
        message: message.map(|m| message_key(m).to_string()),
        notice: message.map(|m| SearchNoticeViewModel {
            title: m.title().to_string(),
            hint: m.hint().map(str::to_string),
        }),
    };

    let mut result = CommandOutput::new(content);
    if let Some(first) = results.first() {
        result = result.with_tip(
            Tip::new("See product details").with_command(format!("tradify show {}", first.id)),
        );
    }
    result
}
