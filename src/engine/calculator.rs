// ==========================================
// 管板加工报价系统 - 费用计算器
// ==========================================
// 职责: 小计与总价的精确小数运算
// 红线: 计算全程不舍入；两位小数只出现在格式化边界
// ==========================================

use rust_decimal::{Decimal, RoundingStrategy};

pub struct CostCalculator;

impl CostCalculator {
    /// 小计 = (单价 ?? 0) * (孔数 ?? 0)，全精度
    pub fn subtotal(unit_price: Option<Decimal>, quantity: Option<i32>) -> Decimal {
        let price = unit_price.unwrap_or_default();
        let qty = Decimal::from(quantity.unwrap_or(0));
        price * qty
    }

    /// 总价 = 各小计的精确和
    pub fn grand_total(subtotals: &[Decimal]) -> Decimal {
        subtotals.iter().copied().sum()
    }

    /// 格式化边界: 金额显示为两位小数字符串。
    /// 只在输出时调用，反复相加不会累积舍入误差
    pub fn format_amount(amount: Decimal) -> String {
        // 四舍五入（远离零），再补足两位小数
        format!(
            "{:.2}",
            amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        )
    }
}
