//! Application constants and UI copy

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_DIR_NAME: &str = "GovernanceBERT Demo";
pub const MODEL_NAME: &str = "GovernanceBERT-governance";

pub const WINDOW_TITLE: &str = "GovernanceBERT-governance 文本分类 WebUI";
pub const PAGE_HEADING: &str = "GovernanceBERT-governance · 治理文本分类 WebUI 演示";
pub const PAGE_INTRO: &str = "本界面以交互方式展示 GovernanceBERT-governance 在 ESG 治理领域文本分类中的典型使用流程，\
包括模型加载状态与分类结果的可视化展示。";
pub const FOOTER_NOTE: &str =
    "说明：当前为轻量级演示界面，未实际下载与加载 GovernanceBERT-governance 模型参数。";

pub const LOAD_BUTTON: &str = "加载模型（演示）";
pub const STATUS_LABEL: &str = "模型状态";
pub const STATUS_INITIAL: &str = "尚未加载";

pub const TAB_CLASSIFY: &str = "文本分类";
pub const CLASSIFY_HINT: &str =
    "在下方输入治理相关文本（如公司治理、董事会、ESG 披露等），模型将输出分类标签与置信度。";
pub const INPUT_LABEL: &str = "输入文本";
pub const INPUT_PLACEHOLDER: &str =
    "例如：The board of directors approved the new governance policy...";
pub const LABEL_OUTPUT: &str = "预测标签";
pub const DETAIL_OUTPUT: &str = "结果说明";
pub const CLASSIFY_BUTTON: &str = "执行分类（演示）";

pub const INPUT_ROWS: usize = 4;
pub const DETAIL_ROWS: usize = 8;
