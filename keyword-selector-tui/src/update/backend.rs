//! 分析服务器响应处理

use crate::backend::BackendResponse;
use crate::i18n::t;
use crate::model::App;

use super::report;

pub fn update(app: &mut App, response: BackendResponse) {
    let texts = t();

    match response {
        BackendResponse::Analyzed(outcome) => match app.controller.finish_analyze(outcome) {
            Ok(()) => {
                // 新结果：光标回到列表开头
                app.results.reset();
                app.set_status(texts.status.analyzed);
            }
            Err(e) => report(app, &e),
        },
        BackendResponse::Generated(outcome) => match app.controller.finish_generate(outcome) {
            Ok(()) => {
                app.complete.reset();
                app.set_status(texts.status.generated);
            }
            Err(e) => {
                app.clear_status();
                report(app, &e);
            }
        },
    }
}
